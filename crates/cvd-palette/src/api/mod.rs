//! Public API for the cvd-palette crate.
//!
//! This module provides the high-level API: the [`PaletteSearch`] builder and
//! the [`CvdError`] unified error type.

mod error;
mod search;

pub use error::CvdError;
pub use search::{PaletteSearch, SearchResult};
