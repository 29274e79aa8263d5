use serde::Deserialize;

/// Which clipboard backend to use for copying links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// System clipboard with OSC 52 fallback
    #[default]
    Auto,
    /// System clipboard only (arboard)
    System,
    /// OSC 52 escape sequences only (for remote terminals)
    Osc52,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a keystroke burst triggers the filter
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Startup default when no dark-mode preference has been stored yet
    pub dark: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub backend: ClipboardBackend,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub theme: ThemeConfig,
    pub clipboard: ClipboardConfig,
}
