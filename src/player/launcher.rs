use std::ffi::OsString;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::config::PlayerSettings;
use crate::error::PlayerError;

/// What to play: a clip of `length_secs` starting `offset_secs` into `path`.
#[derive(Debug, Clone, Copy)]
pub struct FragmentRequest<'a> {
    pub path: &'a Path,
    pub offset_secs: u64,
    pub length_secs: u64,
}

/// A running (or finished) playback process.
pub trait PlaybackProcess {
    /// Whether the process is still alive.
    fn is_running(&mut self) -> bool;
    /// Stop the process now and release it. Safe on an exited process.
    fn terminate(&mut self);
}

impl PlaybackProcess for Child {
    fn is_running(&mut self) -> bool {
        matches!(self.try_wait(), Ok(None))
    }

    fn terminate(&mut self) {
        if self.is_running() {
            if let Err(e) = self.kill() {
                log::warn!("failed to stop player process {}: {e}", self.id());
            }
        }
        // Reap so no zombie is left behind.
        let _ = self.wait();
    }
}

pub trait Launcher {
    type Process: PlaybackProcess;

    fn launch(&self, request: &FragmentRequest<'_>) -> Result<Self::Process, PlayerError>;
}

/// Launches the configured command-line player (`ffplay` by default).
pub struct CommandLauncher {
    settings: PlayerSettings,
}

impl CommandLauncher {
    pub fn new(settings: PlayerSettings) -> Self {
        Self { settings }
    }

    /// Full argument list: configured args, then `-ss <offset> -t <length> <path>`.
    pub fn args(&self, request: &FragmentRequest<'_>) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.settings.args.iter().map(OsString::from).collect();
        args.push("-ss".into());
        args.push(request.offset_secs.to_string().into());
        args.push("-t".into());
        args.push(request.length_secs.to_string().into());
        args.push(request.path.as_os_str().to_os_string());
        args
    }
}

impl Launcher for CommandLauncher {
    type Process = Child;

    fn launch(&self, request: &FragmentRequest<'_>) -> Result<Child, PlayerError> {
        let program = &self.settings.program;
        log::debug!(
            "starting {program} at {}s for {}s: {}",
            request.offset_secs,
            request.length_secs,
            request.path.display()
        );

        // Keep the player off the terminal the UI is drawing on.
        Command::new(program)
            .args(self.args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PlayerError::Spawn {
                program: program.clone(),
                source,
            })
    }
}
