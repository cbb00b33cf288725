//! In-memory launcher for tests: counts live "processes" instead of spawning.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::PlayerError;

use super::launcher::{FragmentRequest, Launcher, PlaybackProcess};

pub(crate) struct FakeProcess {
    active: Rc<Cell<usize>>,
    running: bool,
}

impl PlaybackProcess for FakeProcess {
    fn is_running(&mut self) -> bool {
        self.running
    }

    fn terminate(&mut self) {
        if self.running {
            self.running = false;
            self.active.set(self.active.get() - 1);
        }
    }
}

#[derive(Default)]
pub(crate) struct FakeLauncher {
    pub active: Rc<Cell<usize>>,
    /// `(path, offset, length)` of every launch.
    pub requests: RefCell<Vec<(PathBuf, u64, u64)>>,
    pub fail: Cell<bool>,
}

impl FakeLauncher {
    pub fn failing() -> Self {
        let launcher = Self::default();
        launcher.fail.set(true);
        launcher
    }
}

impl Launcher for FakeLauncher {
    type Process = FakeProcess;

    fn launch(&self, request: &FragmentRequest<'_>) -> Result<FakeProcess, PlayerError> {
        if self.fail.get() {
            return Err(PlayerError::Spawn {
                program: "fake-player".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        self.requests.borrow_mut().push((
            request.path.to_path_buf(),
            request.offset_secs,
            request.length_secs,
        ));
        self.active.set(self.active.get() + 1);
        Ok(FakeProcess {
            active: self.active.clone(),
            running: true,
        })
    }
}
