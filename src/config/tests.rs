use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_tunequiz_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TUNEQUIZ_CONFIG_PATH", "/tmp/tunequiz-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/tunequiz-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("tunequiz")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("tunequiz")
            .join("config.toml")
    );
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let _g1 = EnvGuard::set("TUNEQUIZ_CONFIG_PATH", missing.to_str().unwrap());
    let _g2 = EnvGuard::remove("TUNEQUIZ__PLAYER__PROGRAM");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.program, "ffplay");
    assert_eq!(s.player.args, vec!["-nodisp", "-autoexit", "-loglevel", "quiet"]);
    assert_eq!(s.library.extensions, vec!["mp3", "wav", "ogg", "flac"]);
    assert!(s.library.recursive);
    assert_eq!(s.logging.level, "error");
    assert!(s.logging.file.is_none());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
header_text = "hello"

[player]
program = "mpv"
args = ["--no-video", "--really-quiet"]

[library]
extensions = ["mp3"]
recursive = false
include_hidden = false
follow_links = false
max_depth = 3

[logging]
level = "debug"
file = "/tmp/tunequiz.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TUNEQUIZ_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TUNEQUIZ__PLAYER__PROGRAM");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.player.program, "mpv");
    assert_eq!(s.player.args, vec!["--no-video", "--really-quiet"]);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.max_depth, Some(3));
    assert_eq!(s.logging.level, "debug");
    assert_eq!(
        s.logging.file,
        Some(std::path::PathBuf::from("/tmp/tunequiz.log"))
    );
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
program = "mpv"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TUNEQUIZ_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("TUNEQUIZ__PLAYER__PROGRAM", "ffplay");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.program, "ffplay");
}

#[test]
fn validate_rejects_empty_program_and_extensions() {
    let mut s = Settings::default();
    s.player.program = "  ".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions = vec![String::new()];
    assert!(s.validate().is_err());
}
