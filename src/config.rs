use std::path::PathBuf;

use crate::constants::{DEFAULT_HISTORY_PATH, HISTORY_PATH_ENV};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub history_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let history_path = lookup(HISTORY_PATH_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_PATH));
        Self { history_path }
    }

    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.history_path = path;
        }
        self
    }
}
