//! Configuration loader and schema types.
//!
//! Only ambient behavior is configurable here: the external player command,
//! library scanning, the UI header and logging.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
