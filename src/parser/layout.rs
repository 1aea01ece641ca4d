//! KLE (keyboard-layout-editor.com) layout parsing.
//!
//! This module replays the compact, stateful row/key notation used by KLE
//! into a flat list of absolute key rectangles. Each row is an array whose
//! items are either a modifier object (adjusting cursor, size, or rotation
//! state for subsequent keys) or a string placeholder for one key.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::models::{Layout, PhysicalKey};

/// Positioning state threaded through the row/key scan.
///
/// Size is per-key and resets to 1x1 after every key; rotation and its pivot
/// persist until redefined by a modifier object.
#[derive(Debug, Clone, Copy)]
struct KleState {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
    rx: f64,
    ry: f64,
}

impl Default for KleState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: 1.0,
            h: 1.0,
            r: 0.0,
            rx: 0.0,
            ry: 0.0,
        }
    }
}

impl KleState {
    /// Applies one modifier object to the state.
    ///
    /// `x`/`y` are relative deltas; `w`/`h`/`r` are absolute. Setting a
    /// rotation pivot also snaps the cursor to it, anchoring everything that
    /// follows to the new origin.
    fn apply_modifier(&mut self, obj: &serde_json::Map<String, Value>) {
        if let Some(dx) = obj.get("x").and_then(Value::as_f64) {
            self.x += dx;
        }
        if let Some(dy) = obj.get("y").and_then(Value::as_f64) {
            self.y += dy;
        }
        if let Some(w) = obj.get("w").and_then(Value::as_f64) {
            self.w = w;
        }
        if let Some(h) = obj.get("h").and_then(Value::as_f64) {
            self.h = h;
        }
        if let Some(r) = obj.get("r").and_then(Value::as_f64) {
            self.r = r;
        }
        if let Some(rx) = obj.get("rx").and_then(Value::as_f64) {
            self.rx = rx;
            self.x = rx;
        }
        if let Some(ry) = obj.get("ry").and_then(Value::as_f64) {
            self.ry = ry;
            self.y = ry;
        }
    }
}

/// Parses a KLE layout file into a [`Layout`].
///
/// The layout name is derived from the file stem.
///
/// # Errors
///
/// Returns errors for a missing file, unreadable content, or invalid JSON.
pub fn parse_kle_layout_file(path: &Path) -> Result<Layout> {
    if !path.exists() {
        anyhow::bail!("Layout file not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    let name = path
        .file_stem()
        .map_or_else(|| "layout".to_string(), |s| s.to_string_lossy().to_string());

    parse_kle_layout(&content, &name)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}

/// Parses KLE layout text into a [`Layout`].
///
/// Accepts both strict JSON and KLE's "raw data" form, which uses unquoted
/// object keys (valid JSON5).
///
/// # Errors
///
/// Returns an error only when the input cannot be decoded at all; this is
/// the single hard-failure case of the parser.
pub fn parse_kle_layout(data: &str, name: &str) -> Result<Layout> {
    let raw: Value = match serde_json::from_str(data) {
        Ok(value) => value,
        // KLE raw data is JSON5: unquoted keys, trailing commas
        Err(_) => json5::from_str(data).context("Invalid KLE layout JSON")?,
    };

    let rows = raw
        .as_array()
        .context("KLE layout must be an array of rows")?;

    let mut layout = Layout::new(name);
    let mut state = KleState::default();

    for row in rows {
        let Some(items) = row.as_array() else {
            // Skip the metadata object KLE places before the first row
            continue;
        };

        // Rows restart at the active rotation origin, one unit down
        state.x = state.rx;
        state.y += 1.0;

        for item in items {
            match item {
                Value::Object(obj) => state.apply_modifier(obj),
                Value::String(_) => {
                    layout.keys.push(PhysicalKey {
                        x: state.x,
                        // Compensate for the row-start increment
                        y: state.y - 1.0,
                        w: state.w,
                        h: state.h,
                        r: state.r,
                        rx: state.rx,
                        ry: state.ry,
                        index: layout.keys.len(),
                    });

                    state.x += state.w;
                    state.w = 1.0;
                    state.h = 1.0;
                }
                _ => {}
            }
        }
    }

    debug!(name, keys = layout.keys.len(), "parsed KLE layout");
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_plain_keys() {
        let layout = parse_kle_layout(r#"[["A","B"]]"#, "test").unwrap();
        assert_eq!(layout.keys.len(), 2);

        let first = layout.keys[0];
        assert_eq!(first.index, 0);
        assert_eq!((first.x, first.y, first.w, first.h), (0.0, 0.0, 1.0, 1.0));

        let second = layout.keys[1];
        assert_eq!(second.index, 1);
        assert_eq!((second.x, second.y, second.w, second.h), (1.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_width_modifier_applies_to_one_key() {
        let layout = parse_kle_layout(r#"[[{"w":2},"A","B"]]"#, "test").unwrap();

        assert_eq!(layout.keys[0].w, 2.0);
        // The following key reverts to 1u and starts after the wide key
        assert_eq!(layout.keys[1].w, 1.0);
        assert_eq!(layout.keys[1].x, 2.0);
    }

    #[test]
    fn test_rows_advance_y() {
        let layout = parse_kle_layout(r#"[["A"],["B"],["C"]]"#, "test").unwrap();
        assert_eq!(layout.keys[0].y, 0.0);
        assert_eq!(layout.keys[1].y, 1.0);
        assert_eq!(layout.keys[2].y, 2.0);
        // Each row restarts at x = 0 when no rotation origin is set
        assert!(layout.keys.iter().all(|k| k.x == 0.0));
    }

    #[test]
    fn test_x_y_deltas_are_relative() {
        let layout = parse_kle_layout(r#"[["A",{"x":0.5,"y":0.25},"B"]]"#, "test").unwrap();
        assert_eq!(layout.keys[1].x, 1.5);
        assert_eq!(layout.keys[1].y, 0.25);
    }

    #[test]
    fn test_rotation_persists_across_keys() {
        let layout = parse_kle_layout(r#"[[{"r":15},"A","B"]]"#, "test").unwrap();
        assert_eq!(layout.keys[0].r, 15.0);
        assert_eq!(layout.keys[1].r, 15.0);
    }

    #[test]
    fn test_rotation_origin_anchors_rows() {
        // rx resets the cursor and anchors subsequent row starts
        let layout = parse_kle_layout(r#"[[{"r":30,"rx":3,"ry":2},"A"],["B"]]"#, "test").unwrap();

        assert_eq!(layout.keys[0].x, 3.0);
        assert_eq!(layout.keys[0].rx, 3.0);
        assert_eq!(layout.keys[0].ry, 2.0);
        // ry snapped y to 2 after the row increment; emission compensates
        // by one unit, and the next row restarts at rx
        assert_eq!(layout.keys[0].y, 1.0);
        assert_eq!(layout.keys[1].x, 3.0);
        assert_eq!(layout.keys[1].y, 2.0);
    }

    #[test]
    fn test_leading_metadata_object_is_skipped() {
        let layout =
            parse_kle_layout(r#"[{"name":"My Board"},["A","B"]]"#, "test").unwrap();
        assert_eq!(layout.keys.len(), 2);
        assert_eq!(layout.keys[0].y, 0.0);
    }

    #[test]
    fn test_json5_raw_data_accepted() {
        // KLE raw data uses unquoted keys
        let layout = parse_kle_layout(r#"[[{w:1.5},"TAB","Q"]]"#, "test").unwrap();
        assert_eq!(layout.keys[0].w, 1.5);
        assert_eq!(layout.keys[1].x, 1.5);
    }

    #[test]
    fn test_invalid_input_is_a_hard_error() {
        assert!(parse_kle_layout("not a layout", "test").is_err());
        assert!(parse_kle_layout(r#"{"rows":[]}"#, "test").is_err());
    }

    #[test]
    fn test_determinism() {
        let data = r#"[[{"w":2},"A","B"],[{"x":1},"C"]]"#;
        let a = parse_kle_layout(data, "test").unwrap();
        let b = parse_kle_layout(data, "test").unwrap();
        assert_eq!(a, b);
    }
}
