//! Service layer for file storage.
//!
//! This module contains services that persist parsed keymaps and layouts
//! as JSON files and apply edits to stored keymaps.

pub mod store;

// Re-export commonly used types
pub use store::Store;
