use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use monitor_gamma_application::{ApplicationError, PresetRepository};
use monitor_gamma_domain::{GammaParams, Hotkey, Preset, PresetStore, DEFAULT_RESET_HOTKEY};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

/// On-disk shape: `{"presets": {name: {"b", "c", "g", "hotkey"}}, "reset_hotkey"}`.
#[derive(Debug, Serialize, Deserialize)]
struct StoredFile {
    #[serde(default)]
    presets: IndexMap<String, StoredPreset>,
    #[serde(default = "default_reset_hotkey")]
    reset_hotkey: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreset {
    b: f64,
    c: f64,
    g: f64,
    #[serde(default)]
    hotkey: String,
}

fn default_reset_hotkey() -> String {
    DEFAULT_RESET_HOTKEY.to_string()
}

#[derive(Debug, Clone)]
pub struct JsonPresetRepository {
    path: PathBuf,
}

impl JsonPresetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PresetRepository for JsonPresetRepository {
    fn load(&self) -> Result<PresetStore, ApplicationError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no preset file yet");
            return Ok(PresetStore::default());
        }

        let text =
            fs::read_to_string(&self.path).map_err(|error| ApplicationError::Io(error.to_string()))?;
        let stored: StoredFile = serde_json::from_str(&text)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        Ok(store_from_file(stored))
    }

    fn save(&self, store: &PresetStore) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let mut bytes = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(b"    "));
        file_from_store(store)
            .serialize(&mut serializer)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        fs::write(&self.path, bytes).map_err(|error| ApplicationError::Io(error.to_string()))?;
        debug!(path = %self.path.display(), presets = store.len(), "presets written");
        Ok(())
    }
}

fn store_from_file(stored: StoredFile) -> PresetStore {
    let reset_hotkey = Hotkey::parse_optional(&stored.reset_hotkey).unwrap_or_else(|error| {
        warn!(%error, "ignoring invalid reset hotkey");
        None
    });
    let mut store = PresetStore::new(reset_hotkey);

    for (name, entry) in stored.presets {
        let params = GammaParams::new(entry.b, entry.c, entry.g).clamped();
        let hotkey = Hotkey::parse_optional(&entry.hotkey).unwrap_or_else(|error| {
            warn!(preset = %name, %error, "dropping invalid preset hotkey");
            None
        });
        match Preset::new(&name, params, hotkey) {
            Ok(preset) => {
                store.upsert(preset);
            }
            Err(error) => warn!(preset = %name, %error, "skipping invalid preset"),
        }
    }
    store
}

fn file_from_store(store: &PresetStore) -> StoredFile {
    let presets = store
        .presets()
        .map(|preset| {
            (
                preset.name.clone(),
                StoredPreset {
                    b: preset.params.brightness,
                    c: preset.params.contrast,
                    g: preset.params.gamma,
                    hotkey: preset
                        .hotkey
                        .as_ref()
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                },
            )
        })
        .collect();

    StoredFile {
        presets,
        reset_hotkey: store
            .reset_hotkey()
            .map(ToString::to_string)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn hotkey(text: &str) -> Hotkey {
        Hotkey::parse(text).expect("hotkey")
    }

    fn sample_store() -> PresetStore {
        let mut store = PresetStore::new(Some(hotkey("ctrl+f9")));
        store.upsert(
            Preset::new("게임", GammaParams::new(1.25, 0.9, 2.2), Some(hotkey("f1")))
                .expect("preset"),
        );
        store.upsert(Preset::new("plain", GammaParams::new(0.75, 1.5, 0.6), None).expect("preset"));
        store
    }

    #[test]
    fn missing_file_loads_default_store() {
        let dir = TempDir::new().expect("tempdir");
        let repo = JsonPresetRepository::new(dir.path().join("gamma_config.json"));
        let store = repo.load().expect("load");
        assert_eq!(store, PresetStore::default());
    }

    #[test]
    fn save_then_load_keeps_preset_fields() {
        let dir = TempDir::new().expect("tempdir");
        let repo = JsonPresetRepository::new(dir.path().join("nested").join("gamma_config.json"));
        let store = sample_store();

        repo.save(&store).expect("save");
        let loaded = repo.load().expect("load");

        assert_eq!(loaded, store);
        let names: Vec<&str> = loaded.presets().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["게임", "plain"]);
    }

    #[test]
    fn file_uses_flat_json_layout() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("gamma_config.json");
        JsonPresetRepository::new(&path)
            .save(&sample_store())
            .expect("save");

        let text = fs::read_to_string(&path).expect("read");
        assert!(text.contains("게임"), "non-ascii names are written verbatim");
        assert!(text.contains("\n    \"presets\""));

        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["reset_hotkey"], "ctrl+f9");
        assert_eq!(value["presets"]["게임"]["b"], 1.25);
        assert_eq!(value["presets"]["게임"]["hotkey"], "f1");
        assert_eq!(value["presets"]["plain"]["hotkey"], "");
    }

    #[test]
    fn corrupt_file_is_a_persistence_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("gamma_config.json");
        fs::write(&path, "{ not json").expect("write");

        let result = JsonPresetRepository::new(&path).load();
        assert!(matches!(result, Err(ApplicationError::Persistence(_))));
    }

    #[test]
    fn lenient_fields_are_normalized_on_load() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("gamma_config.json");
        fs::write(
            &path,
            r#"{"presets": {
                "hot": {"b": 9.0, "c": 1.0, "g": 0.0, "hotkey": "F3"},
                "broken": {"b": 1.0, "c": 1.0, "g": 1.0, "hotkey": "ctrl+"},
                "bare": {"b": 1.1, "c": 1.0, "g": 1.0}
            }}"#,
        )
        .expect("write");

        let store = JsonPresetRepository::new(&path).load().expect("load");
        let hot = store.get("hot").expect("hot");
        assert_eq!(hot.params, GammaParams::new(2.0, 1.0, 0.1));
        assert_eq!(hot.hotkey, Some(hotkey("f3")));
        assert_eq!(store.get("broken").expect("broken").hotkey, None);
        assert_eq!(store.get("bare").expect("bare").hotkey, None);
        assert_eq!(store.reset_hotkey(), Some(&hotkey("f9")));
    }
}
