//! KeyViewer Library
//!
//! This library provides the core functionality of KeyViewer: parsing ZMK
//! keymap files into display-label layers, replaying KLE layout descriptions
//! into absolute key geometry, and storing the results as JSON.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
