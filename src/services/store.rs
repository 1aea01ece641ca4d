//! Keymap and layout file storage.
//!
//! This module centralizes the on-disk JSON store, providing a consistent
//! interface for saving, loading, and listing parsed keymaps and layouts.
//! Files live under a data directory in `keymaps/` and `layouts/` subfolders,
//! one pretty-printed JSON file per entry.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{Keymap, Layout};

/// On-disk JSON store for keymaps and layouts.
#[derive(Debug, Clone)]
pub struct Store {
    keymaps_dir: PathBuf,
    layouts_dir: PathBuf,
}

impl Store {
    /// Opens a store rooted at `data_dir`, creating the subdirectories
    /// if they do not exist yet.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let keymaps_dir = data_dir.join("keymaps");
        let layouts_dir = data_dir.join("layouts");

        for dir in [&keymaps_dir, &layouts_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create store directory: {}", dir.display()))?;
        }

        Ok(Self {
            keymaps_dir,
            layouts_dir,
        })
    }

    /// Saves a keymap under its name, replacing any previous version.
    pub fn save_keymap(&self, keymap: &Keymap) -> Result<PathBuf> {
        let path = self.keymap_path(&keymap.name);
        write_json_atomic(&path, keymap)?;
        info!(name = %keymap.name, path = %path.display(), "saved keymap");
        Ok(path)
    }

    /// Loads a keymap by name.
    pub fn load_keymap(&self, name: &str) -> Result<Keymap> {
        let path = self.keymap_path(name);
        read_json(&path).with_context(|| format!("Keymap '{name}' not found in store"))
    }

    /// Lists the names of all stored keymaps, sorted alphabetically.
    pub fn list_keymaps(&self) -> Result<Vec<String>> {
        list_json_names(&self.keymaps_dir)
    }

    /// Saves a layout under its name, replacing any previous version.
    pub fn save_layout(&self, layout: &Layout) -> Result<PathBuf> {
        let path = self.layout_path(&layout.name);
        write_json_atomic(&path, layout)?;
        info!(name = %layout.name, path = %path.display(), "saved layout");
        Ok(path)
    }

    /// Loads a layout by name.
    pub fn load_layout(&self, name: &str) -> Result<Layout> {
        let path = self.layout_path(name);
        read_json(&path).with_context(|| format!("Layout '{name}' not found in store"))
    }

    /// Lists the names of all stored layouts, sorted alphabetically.
    pub fn list_layouts(&self) -> Result<Vec<String>> {
        list_json_names(&self.layouts_dir)
    }

    /// Sets or clears a custom key name on a stored keymap and persists it.
    ///
    /// An empty `label` clears the override. Returns the updated keymap.
    pub fn set_custom_name(
        &self,
        name: &str,
        layer_index: usize,
        key_index: usize,
        label: &str,
    ) -> Result<Keymap> {
        let mut keymap = self.load_keymap(name)?;
        keymap.set_custom_name(layer_index, key_index, label)?;
        self.save_keymap(&keymap)?;
        Ok(keymap)
    }

    fn keymap_path(&self, name: &str) -> PathBuf {
        self.keymaps_dir.join(format!("{}.json", sanitize_filename(name)))
    }

    fn layout_path(&self, name: &str) -> PathBuf {
        self.layouts_dir.join(format!("{}.json", sanitize_filename(name)))
    }
}

/// Sanitizes an entry name for use as a filename.
///
/// Replaces path separators and other problematic characters with
/// underscores and converts to lowercase.
pub fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\', ':', ' '], "_").to_lowercase()
}

/// Writes a value as pretty-printed JSON using a temp file + rename so the
/// target is never left half-written.
fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)
        .with_context(|| format!("Failed to write temp file: {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move temp file into place: {}", path.display()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))
}

fn list_json_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // Missing directory means an empty store, not an error
        Err(_) => return Ok(names),
    };

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Layer;
    use tempfile::TempDir;

    fn test_keymap(name: &str) -> Keymap {
        let mut keymap = Keymap::new(name);
        keymap
            .layers
            .push(Layer::new("Base", vec!["A".to_string(), "B".to_string()]));
        keymap
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("My Keymap"), "my_keymap");
        assert_eq!(sanitize_filename("corne/v3:test"), "corne_v3_test");
    }

    #[test]
    fn test_save_and_load_keymap() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();

        let keymap = test_keymap("corne");
        store.save_keymap(&keymap).unwrap();

        let loaded = store.load_keymap("corne").unwrap();
        assert_eq!(loaded, keymap);
    }

    #[test]
    fn test_load_missing_keymap_errors() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        assert!(store.load_keymap("nope").is_err());
    }

    #[test]
    fn test_list_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();

        store.save_keymap(&test_keymap("zeta")).unwrap();
        store.save_keymap(&test_keymap("alpha")).unwrap();

        assert_eq!(store.list_keymaps().unwrap(), vec!["alpha", "zeta"]);
        assert!(store.list_layouts().unwrap().is_empty());
    }

    #[test]
    fn test_set_custom_name_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();
        store.save_keymap(&test_keymap("corne")).unwrap();

        store.set_custom_name("corne", 0, 1, "Magic").unwrap();
        let loaded = store.load_keymap("corne").unwrap();
        assert_eq!(
            loaded.layers[0].custom_names.get("1"),
            Some(&"Magic".to_string())
        );

        // Clearing removes the entry rather than storing an empty string
        store.set_custom_name("corne", 0, 1, "").unwrap();
        let loaded = store.load_keymap("corne").unwrap();
        assert!(loaded.layers[0].custom_names.is_empty());
    }

    #[test]
    fn test_save_and_load_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::open(temp_dir.path()).unwrap();

        let layout = crate::parser::parse_kle_layout(r#"[["A","B"]]"#, "planck").unwrap();
        store.save_layout(&layout).unwrap();

        let loaded = store.load_layout("planck").unwrap();
        assert_eq!(loaded, layout);
    }
}
