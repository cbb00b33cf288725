//! Quiz core: the per-game state machine and the fragment offset policy.
//!
//! Game constants are fixed; nothing in here is read from configuration.

mod fragment;
mod session;

pub use fragment::select_start_offset;
pub use session::*;

/// Number of rounds in one game.
pub const ROUNDS: u32 = 10;
/// Nominal length of a played fragment, in seconds.
pub const FRAGMENT_SECONDS: u64 = 10;
/// Answers offered per round: the correct track plus three others.
pub const OPTION_COUNT: usize = 4;
