use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TermfolioError};

pub const CONFIG_ENV: &str = "TERMFOLIO_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt_user: String,
    pub prompt_host: String,
    pub max_scrollback: usize,
    /// Auto-play the onboarding commands when a session starts.
    pub onboarding: bool,
    pub onboarding_commands: Vec<String>,
    pub matrix_duration_ms: u64,
    pub exit_delay_ms: u64,
    /// Portfolio JSON to load instead of the built-in data.
    pub registry_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt_user: "guest".to_string(),
            prompt_host: "portfolio".to_string(),
            max_scrollback: 2000,
            onboarding: true,
            onboarding_commands: vec![
                "whoami".to_string(),
                "about".to_string(),
                "help".to_string(),
            ],
            matrix_duration_ms: 5000,
            exit_delay_ms: 1500,
            registry_path: None,
            log_filter: "termfolio=info".to_string(),
        }
    }
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TermfolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| TermfolioError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `$TERMFOLIO_CONFIG` or the file in the user data dir. A missing
    /// file means defaults.
    pub fn load() -> Result<Self> {
        match config_file() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn prompt(&self) -> String {
        format!("{}@{}", self.prompt_user, self.prompt_host)
    }
}

pub fn config_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let base = data_dir()?;
    Some(base.join("termfolio").join("config.json"))
}

fn data_dir() -> Option<PathBuf> {
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata));
    }
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".local").join("share"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "prompt_user": "visitor", "onboarding": false }"#).unwrap();

        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.prompt_user, "visitor");
        assert!(!config.onboarding);
        assert_eq!(config.matrix_duration_ms, 5000);
        assert_eq!(config.onboarding_commands.len(), 3);
    }

    #[test]
    fn broken_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            Config::from_path(&path),
            Err(TermfolioError::Config { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::from_path(&dir.path().join("absent.json")),
            Err(TermfolioError::Io { .. })
        ));
    }
}
