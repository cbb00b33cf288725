//! Error types shared by the quiz session and the fragment player.

use std::io;

use thiserror::Error;

use crate::quiz::Phase;

#[derive(Error, Debug)]
pub enum QuizError {
    /// Not enough distinct tracks to build a four-option round.
    #[error("need at least {required} tracks, found {found}")]
    InsufficientLibrary { found: usize, required: usize },

    #[error("cannot {action} while {phase:?}")]
    InvalidTransition { action: &'static str, phase: Phase },

    #[error("option {0} is out of range")]
    OptionOutOfRange(usize),
}

#[derive(Error, Debug)]
pub enum PlayerError {
    /// The player binary could not be launched (missing, not executable, ...).
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}
