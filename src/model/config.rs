use std::collections::HashMap;

use serde::Deserialize;

/// Startup palette choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// User configuration, read from `config.toml` in the muxref config
/// directory. Everything is optional; a missing file means defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserConfig {
    /// Palette at startup; `t` still toggles at runtime
    #[serde(default)]
    pub theme: ThemeChoice,
    /// Hex color overrides applied over the chosen palette
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Default alternate catalog file
    #[serde(default)]
    pub catalog: Option<String>,
}
