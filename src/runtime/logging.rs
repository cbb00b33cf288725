use std::fs::OpenOptions;

use crate::config::LoggingSettings;

/// Install the global logger.
///
/// `RUST_LOG` wins over `logging.level`. With `logging.file` set, records are
/// appended there so they never land on the TUI.
pub fn init(settings: &LoggingSettings) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.level.as_str()),
    );

    if let Some(path) = &settings.file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("tunequiz: cannot open log file {}: {e}", path.display()),
        }
    }

    if let Err(e) = builder.try_init() {
        eprintln!("tunequiz: logger already initialized: {e}");
    }
}
