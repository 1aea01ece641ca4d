//! Keymap and layer data structures.

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::Layout;

/// A single keymap layer: a name plus one display label per physical key index.
///
/// `keys[i]` corresponds to the `PhysicalKey` with `index == i` in the
/// associated layout. `custom_names` holds user-supplied label overrides keyed
/// by key index (stored as a string for JSON compatibility). Overrides may
/// reference indices beyond `keys.len()`; that is tolerated here and ignored
/// by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Human-readable layer name (e.g., "Base", "Lower")
    pub name: String,
    /// Flat array of key labels, indexed by physical key position
    pub keys: Vec<String>,
    /// Custom names: key index (as string) -> user-supplied label
    #[serde(rename = "customNames", default)]
    pub custom_names: HashMap<String, String>,
}

impl Layer {
    /// Creates a new layer with the given name and labels.
    #[must_use]
    pub fn new(name: impl Into<String>, keys: Vec<String>) -> Self {
        Self {
            name: name.into(),
            keys,
            custom_names: HashMap::new(),
        }
    }

    /// Returns the display label for a key index, preferring a custom name.
    #[must_use]
    pub fn display_label(&self, key_index: usize) -> Option<&str> {
        self.custom_names
            .get(&key_index.to_string())
            .map(String::as_str)
            .or_else(|| self.keys.get(key_index).map(String::as_str))
    }
}

/// A parsed keymap: a name and an ordered list of layers.
///
/// A keymap may embed a physical layout by value to form a self-contained
/// file combining both notations; the two lifecycles are otherwise decoupled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keymap {
    /// Keymap name (typically derived from the source filename)
    pub name: String,
    /// Layers in source file order
    pub layers: Vec<Layer>,
    /// Optional embedded physical layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

impl Keymap {
    /// Creates an empty keymap with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
            layout: None,
        }
    }

    /// Sets or clears a custom key name on one layer.
    ///
    /// An empty `label` removes the override instead of storing an empty
    /// string. Key indices beyond the layer's key count are accepted without
    /// validation; the rendering side ignores out-of-range entries.
    ///
    /// # Errors
    ///
    /// Returns an error if `layer_index` is out of range.
    pub fn set_custom_name(
        &mut self,
        layer_index: usize,
        key_index: usize,
        label: &str,
    ) -> Result<()> {
        let layer_count = self.layers.len();
        let layer = self.layers.get_mut(layer_index).ok_or_else(|| {
            anyhow::anyhow!("Invalid layer index {layer_index} (keymap has {layer_count} layers)")
        })?;

        let key = key_index.to_string();
        if label.is_empty() {
            layer.custom_names.remove(&key);
        } else {
            layer.custom_names.insert(key, label.to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_display_label_prefers_custom_name() {
        let mut layer = Layer::new("Base", vec!["A".to_string(), "B".to_string()]);
        assert_eq!(layer.display_label(0), Some("A"));

        layer.custom_names.insert("0".to_string(), "⌘".to_string());
        assert_eq!(layer.display_label(0), Some("⌘"));
        assert_eq!(layer.display_label(1), Some("B"));
        assert_eq!(layer.display_label(5), None);
    }

    #[test]
    fn test_set_custom_name() {
        let mut keymap = Keymap::new("test");
        keymap.layers.push(Layer::new("Base", vec!["A".to_string()]));

        keymap.set_custom_name(0, 0, "Cmd").unwrap();
        assert_eq!(
            keymap.layers[0].custom_names.get("0"),
            Some(&"Cmd".to_string())
        );
    }

    #[test]
    fn test_set_custom_name_empty_label_removes_entry() {
        let mut keymap = Keymap::new("test");
        keymap.layers.push(Layer::new("Base", vec!["A".to_string()]));

        keymap.set_custom_name(0, 0, "Cmd").unwrap();
        keymap.set_custom_name(0, 0, "").unwrap();
        assert!(keymap.layers[0].custom_names.is_empty());
    }

    #[test]
    fn test_set_custom_name_tolerates_out_of_range_key() {
        let mut keymap = Keymap::new("test");
        keymap.layers.push(Layer::new("Base", vec!["A".to_string()]));

        // Key index 99 is beyond the layer's single key; stored anyway
        keymap.set_custom_name(0, 99, "Future").unwrap();
        assert_eq!(
            keymap.layers[0].custom_names.get("99"),
            Some(&"Future".to_string())
        );
    }

    #[test]
    fn test_set_custom_name_invalid_layer() {
        let mut keymap = Keymap::new("test");
        assert!(keymap.set_custom_name(0, 0, "X").is_err());
    }

    #[test]
    fn test_keymap_serde_field_names() {
        let mut keymap = Keymap::new("test");
        let mut layer = Layer::new("Base", vec!["A".to_string()]);
        layer.custom_names.insert("0".to_string(), "X".to_string());
        keymap.layers.push(layer);

        let json = serde_json::to_value(&keymap).unwrap();
        assert_eq!(json["name"], "test");
        assert_eq!(json["layers"][0]["customNames"]["0"], "X");
        // Absent layout is omitted entirely
        assert!(json.get("layout").is_none());
    }

    #[test]
    fn test_keymap_round_trip() {
        let mut keymap = Keymap::new("round_trip");
        keymap
            .layers
            .push(Layer::new("Base", vec!["A".to_string(), "▽".to_string()]));
        keymap.set_custom_name(0, 1, "custom").unwrap();

        let json = serde_json::to_string(&keymap).unwrap();
        let rehydrated: Keymap = serde_json::from_str(&json).unwrap();
        assert_eq!(keymap, rehydrated);
    }
}
