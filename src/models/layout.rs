//! Physical layout data structures.

use serde::{Deserialize, Serialize};

/// A single key's physical position, size, and rotation in key units.
///
/// Coordinates are in the key-unit grid used by keyboard-layout-editor.com:
/// one unit is the footprint of a standard 1u keycap. `index` is the key's
/// 0-based position in declaration order and is the join key against a
/// keymap layer's flat `keys` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalKey {
    /// X position of the top-left corner in key units
    pub x: f64,
    /// Y position of the top-left corner in key units
    pub y: f64,
    /// Width in key units (default 1)
    pub w: f64,
    /// Height in key units (default 1)
    pub h: f64,
    /// Rotation angle in degrees
    pub r: f64,
    /// Rotation pivot X
    pub rx: f64,
    /// Rotation pivot Y
    pub ry: f64,
    /// Sequential index for mapping to keymap layers
    pub index: usize,
}

/// A physical keyboard layout: a name plus an ordered list of keys.
///
/// Created once by the layout parser and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Layout name (typically derived from the source filename)
    pub name: String,
    /// Keys in declaration order; `keys[i].index == i`
    pub keys: Vec<PhysicalKey>,
}

impl Layout {
    /// Creates an empty layout with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_key_serde_field_names() {
        let key = PhysicalKey {
            x: 1.5,
            y: 0.0,
            w: 2.0,
            h: 1.0,
            r: 15.0,
            rx: 1.0,
            ry: 0.5,
            index: 3,
        };

        let json = serde_json::to_value(key).unwrap();
        assert_eq!(json["x"], 1.5);
        assert_eq!(json["w"], 2.0);
        assert_eq!(json["r"], 15.0);
        assert_eq!(json["rx"], 1.0);
        assert_eq!(json["ry"], 0.5);
        assert_eq!(json["index"], 3);
    }

    #[test]
    fn test_layout_round_trip() {
        let mut layout = Layout::new("test");
        layout.keys.push(PhysicalKey {
            x: 0.0,
            y: 0.0,
            w: 1.0,
            h: 1.0,
            r: 0.0,
            rx: 0.0,
            ry: 0.0,
            index: 0,
        });

        let json = serde_json::to_string(&layout).unwrap();
        let rehydrated: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, rehydrated);
    }
}
