use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tunequiz/config.toml` or `~/.config/tunequiz/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TUNEQUIZ__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
///
/// The game itself (rounds, fragment length) is not configurable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub player: PlayerSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Name that tune ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// External player binary used for fragments.
    pub program: String,
    /// Arguments placed before `-ss <offset> -t <length> <path>`.
    ///
    /// The player must exit on its own and must not open a window.
    pub args: Vec<String>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            program: "ffplay".to_string(),
            args: vec![
                "-nodisp".into(),
                "-autoexit".into(),
                "-loglevel".into(),
                "quiet".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "wav".into(), "ogg".into(), "flac".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Write logs here instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            // Anything chattier would scribble over the TUI unless `file` is set.
            level: "error".to_string(),
            file: None,
        }
    }
}
