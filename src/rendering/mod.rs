pub mod swatch;

pub use swatch::{render_swatch_png, render_swatch_rows_png, SwatchLayout, MAX_IMAGE_SIDE};
