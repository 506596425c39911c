//! Persisted user preferences.
//!
//! The browser build kept one `localStorage` entry; here the same key/value
//! surface is a trait over a small JSON file so the session logic stays
//! mockable.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::error;

/// Key under which the last-chosen location is stored.
pub const SELECTED_LOCATION_KEY: &str = "selectedLocation";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub fn resolve_prefs_path() -> PathBuf {
    if let Ok(path) = env::var("ACTIVITY_PREFS_PATH") {
        return PathBuf::from(path);
    }
    PathBuf::from("data/preferences.json")
}

/// File-backed store. Every `set` writes through so a crash never loses a
/// preference change.
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = read_values(&path);
        Self { path, values }
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                error!("failed to create preferences dir: {err}");
                return;
            }
        }
        match serde_json::to_vec_pretty(&self.values) {
            Ok(payload) => {
                if let Err(err) = fs::write(&self.path, payload) {
                    error!("failed to write preferences file: {err}");
                }
            }
            Err(err) => error!("failed to encode preferences: {err}"),
        }
    }
}

fn read_values(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path) {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(values) => values,
            Err(err) => {
                error!("failed to parse preferences file: {err}");
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read preferences file: {err}");
            BTreeMap::new()
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.persist();
    }
}
