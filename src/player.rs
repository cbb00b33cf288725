//! Fragment playback through an external player process.
//!
//! `FragmentPlayer` owns the one outstanding process handle; process creation
//! sits behind the `Launcher` trait so the controller can run against fakes.

mod controller;
mod launcher;

pub use controller::FragmentPlayer;
pub use launcher::{CommandLauncher, FragmentRequest, Launcher, PlaybackProcess};

#[cfg(test)]
pub(crate) mod fake;
