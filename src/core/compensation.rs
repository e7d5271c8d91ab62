//! User-tunable compensation parameters and their persistence.
//!
//! The pair is stored as JSON under a fixed file name (one per user), the
//! desktop analog of the fixed browser local-storage key the settings panel
//! used before.

use log::warn;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::{
    COMPENSATION_SETTINGS_FILE, DEFAULT_COMPENSATION_EXPONENT, DEFAULT_COMPENSATION_FACTOR,
};

/// Parameters of the per-row correction curve `f(row) = row^exponent * factor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompensationSettings {
    #[serde(rename = "compensationFactor")]
    pub factor: f64,
    #[serde(rename = "compensationExponent")]
    pub exponent: f64,
}

impl Default for CompensationSettings {
    fn default() -> Self {
        Self {
            factor: DEFAULT_COMPENSATION_FACTOR,
            exponent: DEFAULT_COMPENSATION_EXPONENT,
        }
    }
}

impl CompensationSettings {
    /// Default on-disk location, next to the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from(COMPENSATION_SETTINGS_FILE)
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(
                        "unparseable compensation settings at {}: {err}; using defaults",
                        path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist settings to `path` as pretty JSON.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CompensationSettings::default();
        assert_eq!(settings.factor, 0.4);
        assert_eq!(settings.exponent, 1.02);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compensation.json");
        let settings = CompensationSettings {
            factor: 0.55,
            exponent: 1.1,
        };
        settings.save_to(&path).unwrap();

        let loaded = CompensationSettings::load_from(&path);
        assert_eq!(loaded, settings);

        // The persisted keys match the historical storage format.
        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("compensationFactor"));
        assert!(json.contains("compensationExponent"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = CompensationSettings::load_from(&dir.path().join("absent.json"));
        assert_eq!(loaded, CompensationSettings::default());
    }
}
