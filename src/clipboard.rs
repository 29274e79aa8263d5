//! Clipboard support for copying result and navigation links.
//!
//! Three backends: the system clipboard (arboard), OSC 52 escape sequences
//! (works over SSH where no display server is reachable), and auto mode,
//! which tries the system clipboard first and falls back to OSC 52.

use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::config::ClipboardBackend;

pub fn copy_text(text: &str, backend: ClipboardBackend) -> Result<(), String> {
    match backend {
        ClipboardBackend::System => copy_system(text),
        ClipboardBackend::Osc52 => copy_osc52(text).map_err(|e| e.to_string()),
        ClipboardBackend::Auto => copy_system(text)
            .or_else(|_| copy_osc52(text).map_err(|e| e.to_string())),
    }
}

fn copy_system(text: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
}

fn copy_osc52(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()
}

fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}
