//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small but realistic ZMK keymap file covering the common binding kinds.
pub const SAMPLE_KEYMAP: &str = r#"
/ {
    keymap {
        compatible = "zmk,keymap";
    };
};

ZMK_LAYER(default_layer,
    &kp TAB    &kp Q      &kp W      &kp E
    &hrm LSHIFT A          &kp S      &lt LOWER SPACE
    &mo 1      &kp LC(LS(T))          &trans     &none
)

ZMK_LAYER(lower_layer,
    &kp N1     &kp N2     &kp F5     &kp LEFT
    &bt BT_SEL 0          &bt BT_CLR &bootloader
    &caps_word &trans     &trans     &trans
)
"#;

/// A four-key KLE layout with a wide key and a rotated cluster.
pub const SAMPLE_KLE_LAYOUT: &str = r#"[
    [{"w":1.5},"TAB","Q"],
    [{"r":15,"rx":1,"ry":2},"A","S"]
]"#;

/// Writes `content` into a file inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (path, temp)
}

/// Creates an empty temp data directory for store-backed commands.
pub fn create_temp_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp data dir")
}
