//! Dark-mode preference persistence
//!
//! A single `dark-mode` boolean key in `~/.config/docfind/state.toml`,
//! written on every toggle and read once at startup. Absent or unreadable
//! state is not an error; callers fall back to the configured default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct State {
    #[serde(rename = "dark-mode")]
    dark_mode: bool,
}

/// Returns the path to the state file
///
/// Always uses ~/.config/docfind/state.toml on all platforms for
/// consistency.
fn state_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("docfind")
        .join("state.toml")
}

pub fn load_dark_mode() -> Option<bool> {
    load_dark_mode_from(&state_path())
}

pub fn load_dark_mode_from(path: &Path) -> Option<bool> {
    let contents = fs::read_to_string(path).ok()?;
    let state: State = toml::from_str(&contents).ok()?;
    Some(state.dark_mode)
}

pub fn store_dark_mode(enabled: bool) -> io::Result<()> {
    store_dark_mode_to(&state_path(), enabled)
}

pub fn store_dark_mode_to(path: &Path, enabled: bool) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let state = State { dark_mode: enabled };
    let contents = toml::to_string(&state)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    fs::write(path, contents)
}
