//! Data models for keymaps and physical layouts.
//!
//! This module contains the core data structures produced by the parsers.
//! Models are plain value objects, independent of the CLI and storage layers.

pub mod keymap;
pub mod layout;

// Re-export all model types
pub use keymap::{Keymap, Layer};
pub use layout::{Layout, PhysicalKey};
