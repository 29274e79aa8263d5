//! Platform URL opener discovery.
//!
//! Activating a result navigates to its link by handing it to the system
//! opener. When none is on PATH, the caller falls back to printing the
//! link after the terminal is restored.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
const OPENER_CANDIDATES: &[&str] = &["open"];

#[cfg(not(target_os = "macos"))]
const OPENER_CANDIDATES: &[&str] = &["xdg-open", "gio", "wslview"];

pub fn find_opener() -> Option<PathBuf> {
    OPENER_CANDIDATES
        .iter()
        .find_map(|candidate| which::which(candidate).ok())
}

pub fn open_link(opener: &Path, link: &str) -> io::Result<()> {
    Command::new(opener)
        .arg(link)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}
