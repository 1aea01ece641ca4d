//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the keymap DSL macro token.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "KeyViewer";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "keyviewer";

/// Macro token that introduces a layer definition in ZMK keymap files.
pub const LAYER_MACRO: &str = "ZMK_LAYER";
