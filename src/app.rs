//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and pairs the quiz session with the
//! fragment player, plus the texts and affordances the UI renders.

mod model;

pub use model::*;
