//! Parsing for the two supported input notations.
//!
//! This module turns ZMK keymap source files into layer/label structures and
//! replays KLE layout descriptions into absolute key geometry.

pub mod keymap;
pub mod layout;

// Re-export commonly used functions
pub use keymap::{convert_binding, parse_keymap, parse_keymap_file};
pub use layout::{parse_kle_layout, parse_kle_layout_file};
