use crate::error::PlayerError;
use crate::library::Track;

use super::launcher::{FragmentRequest, Launcher, PlaybackProcess};

/// Plays at most one fragment at a time.
pub struct FragmentPlayer<L: Launcher> {
    launcher: L,
    current: Option<L::Process>,
}

impl<L: Launcher> FragmentPlayer<L> {
    pub fn new(launcher: L) -> Self {
        Self {
            launcher,
            current: None,
        }
    }

    /// Stop whatever is playing, then play `length_secs` of `track` from
    /// `offset_secs`.
    pub fn start_fragment(
        &mut self,
        track: &Track,
        offset_secs: u64,
        length_secs: u64,
    ) -> Result<(), PlayerError> {
        self.stop();

        let request = FragmentRequest {
            path: &track.path,
            offset_secs,
            length_secs,
        };
        self.current = Some(self.launcher.launch(&request)?);
        Ok(())
    }

    /// Stop the current fragment, if any. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut process) = self.current.take() {
            process.terminate();
        }
    }

    /// Whether a fragment is still playing. Releases the handle once the
    /// player has exited on its own.
    pub fn is_playing(&mut self) -> bool {
        let running = self.current.as_mut().is_some_and(|p| p.is_running());
        if !running {
            self.stop();
        }
        running
    }

    #[cfg(test)]
    pub fn launcher(&self) -> &L {
        &self.launcher
    }
}

impl<L: Launcher> Drop for FragmentPlayer<L> {
    fn drop(&mut self) {
        self.stop();
    }
}
