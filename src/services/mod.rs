pub mod palette_service;

pub use palette_service::{write_swatch, EvolveOutcome, PaletteService};
