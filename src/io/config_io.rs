use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::UserConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Path of the user config file (`<config dir>/muxref/config.toml`)
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("muxref").join("config.toml"))
}

/// Read the user config. A missing file (or no resolvable config dir) is
/// not an error — it means defaults. A present-but-broken file is reported,
/// since silently ignoring it would hide the user's mistake.
pub fn load_config() -> Result<UserConfig, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(UserConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &std::path::Path) -> Result<UserConfig, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(UserConfig::default()),
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ThemeChoice;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.theme, ThemeChoice::Dark);
    }

    #[test]
    fn test_reads_theme_and_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r##"theme = "light"

[colors]
background = "#FFFFFF"
"##,
        )
        .unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(
            config.colors.get("background").map(String::as_str),
            Some("#FFFFFF")
        );
    }

    #[test]
    fn test_broken_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();
        assert!(matches!(
            load_config_from(&path).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }
}
