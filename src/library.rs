//! Music library: the scanned, read-only set of tracks the quiz draws from.
//!
//! `scan` walks a directory once at startup; tag reading lives behind
//! `extract_metadata` so the scanner's fallbacks never depend on it failing
//! loudly.

mod display;
mod model;
mod scan;

pub use model::*;
pub use scan::scan;

#[cfg(test)]
mod tests;
