//! ZMK keymap file parsing.
//!
//! This module extracts layer definitions from ZMK keymap source files and
//! converts each key binding expression into a short human-readable label.
//! Parsing is best-effort by design: the DSL dialect evolves, so unrecognized
//! bindings degrade to a truncated identifier instead of failing the parse.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use tracing::debug;

use crate::constants::{APP_BINARY_NAME, LAYER_MACRO};
use crate::models::{Keymap, Layer};

/// Parses a ZMK keymap file into a [`Keymap`].
///
/// The keymap name is derived from the file stem.
///
/// # Errors
///
/// Returns errors for a missing file or unreadable content. Malformed layer
/// macros inside the file never error; they are skipped.
pub fn parse_keymap_file(path: &Path) -> Result<Keymap> {
    if !path.exists() {
        anyhow::bail!(
            "Keymap file not found: {}\n\n\
             Please check the file path and try again.\n\
             For more options, run: {} --help",
            path.display(),
            APP_BINARY_NAME
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keymap file: {}", path.display()))?;

    let name = path
        .file_stem()
        .map_or_else(|| "keymap".to_string(), |s| s.to_string_lossy().to_string());

    Ok(parse_keymap(&content, &name))
}

/// Parses ZMK keymap source text into a [`Keymap`].
///
/// Finds every `ZMK_LAYER(name, bindings...)` invocation using balanced
/// parenthesis matching and produces one layer per invocation, in file order.
/// Unterminated invocations and invocations without a name/bindings comma are
/// skipped silently.
#[must_use]
pub fn parse_keymap(content: &str, name: &str) -> Keymap {
    let mut keymap = Keymap::new(name);
    let bytes = content.as_bytes();

    let mut idx = 0;
    while let Some(start) = content[idx..].find(LAYER_MACRO) {
        let start = start + idx;

        // Find the opening paren
        let Some(paren_start) = content[start..].find('(') else {
            break;
        };
        let paren_start = paren_start + start;

        // Find matching closing paren using balance counting
        let Some(paren_end) = find_matching_paren(bytes, paren_start) else {
            // Unterminated invocation: skip past the open paren and resume
            idx = paren_start + 1;
            continue;
        };

        let inner = &content[paren_start + 1..paren_end];

        // First comma separates the layer name from the bindings
        let Some(comma_idx) = inner.find(',') else {
            idx = paren_end + 1;
            continue;
        };

        let layer_name = inner[..comma_idx].trim();
        let bindings = &inner[comma_idx + 1..];

        keymap.layers.push(Layer::new(
            format_layer_name(layer_name),
            tokenize_bindings(bindings),
        ));

        idx = paren_end + 1;
    }

    debug!(name, layers = keymap.layers.len(), "parsed keymap");
    keymap
}

/// Finds the index of the closing paren matching the opening paren at `start`.
fn find_matching_paren(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start) != Some(&b'(') {
        return None;
    }

    let mut depth = 1usize;
    for (i, &b) in bytes.iter().enumerate().skip(start + 1) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Converts a snake_case layer identifier to Title Case.
///
/// A trailing `_layer` suffix is dropped first, so `nav_keys_layer`
/// becomes "Nav Keys".
fn format_layer_name(name: &str) -> String {
    let name = name.strip_suffix("_layer").unwrap_or(name);

    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits binding argument text into an ordered list of display labels.
///
/// Bindings are located by their `&name` sigil (optionally followed by a
/// flat parenthesized argument list); each binding's span extends to the
/// start of the next binding so that bare whitespace-delimited arguments
/// like `&kp A` stay attached to their binding.
#[must_use]
pub fn tokenize_bindings(content: &str) -> Vec<String> {
    let content = content.replace(['\n', '\t'], " ");
    let content = content.trim();

    let binding_regex = Regex::new(r"&(\w+)(?:\s*\([^)]*\))?").unwrap();
    let starts: Vec<usize> = binding_regex.find_iter(content).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(content.len());
            convert_binding(content[start..end].trim())
        })
        .collect()
}

/// Converts a single ZMK binding expression to a readable label.
///
/// Never fails: unrecognized bindings fall back to the upper-cased first
/// four characters of the binding name, or `"?"` when no name is present.
#[must_use]
pub fn convert_binding(binding: &str) -> String {
    let binding = binding.trim();

    if binding == "&trans" {
        return "▽".to_string();
    }
    if binding == "&none" {
        return String::new();
    }

    // &kp KEY - basic keypress
    if let Some(rest) = binding.strip_prefix("&kp ") {
        if let Some(key) = rest.split_whitespace().next() {
            return format_key(key);
        }
    }

    // &lt LAYER KEY - layer tap
    if binding.starts_with("&lt ") {
        let parts: Vec<&str> = binding.split_whitespace().collect();
        if parts.len() >= 3 {
            return format!("{}/{}", format_key(parts[2]), format_layer_short(parts[1]));
        }
    }

    // &mo LAYER - momentary layer
    if binding.starts_with("&mo ") {
        let parts: Vec<&str> = binding.split_whitespace().collect();
        if parts.len() >= 2 {
            return format!("[{}]", format_layer_short(parts[1]));
        }
    }

    // &hrm MOD KEY - home row mod; the modifier is deliberately not shown
    if binding.starts_with("&hrm ") {
        let parts: Vec<&str> = binding.split_whitespace().collect();
        if parts.len() >= 3 {
            return format_key(parts[2]);
        }
    }

    // &bt BT_* - bluetooth
    if binding.starts_with("&bt ") {
        let parts: Vec<&str> = binding.split_whitespace().collect();
        if parts.len() >= 2 {
            let cmd = parts[1];
            if cmd.starts_with("BT_SEL") && parts.len() >= 3 {
                return format!("BT{}", parts[2]);
            }
            if cmd == "BT_CLR" {
                return "BT CLR".to_string();
            }
        }
        return "BT".to_string();
    }

    if binding.starts_with("&bootloader") {
        return "BOOT".to_string();
    }
    if binding.starts_with("&caps_word") {
        return "CAPS".to_string();
    }
    if binding.starts_with("&leader") {
        return "LDR".to_string();
    }
    if binding.starts_with("&bl ") {
        return "BL".to_string();
    }
    if binding.starts_with("&studio") {
        return "STUDIO".to_string();
    }

    // Default: extract the binding name and abbreviate it
    let name_regex = Regex::new(r"&(\w+)").unwrap();
    if let Some(captures) = name_regex.captures(binding) {
        return captures[1].chars().take(4).collect::<String>().to_uppercase();
    }

    "?".to_string()
}

/// Well-known key code identifiers and their display labels.
///
/// Case-sensitive on the exact spelling used by the ZMK DSL.
const KEY_LABELS: &[(&str, &str)] = &[
    ("SPACE", "SPC"),
    ("ENTER", "ENT"),
    ("RETURN", "RET"),
    ("BACKSPACE", "BSPC"),
    ("BSPC", "BSPC"),
    ("TAB", "TAB"),
    ("ESC", "ESC"),
    ("ESCAPE", "ESC"),
    ("DELETE", "DEL"),
    ("DEL", "DEL"),
    ("INSERT", "INS"),
    ("HOME", "HOME"),
    ("END", "END"),
    ("PAGE_UP", "PGUP"),
    ("PG_UP", "PGUP"),
    ("PAGE_DOWN", "PGDN"),
    ("PG_DN", "PGDN"),
    ("UP", "↑"),
    ("DOWN", "↓"),
    ("LEFT", "←"),
    ("RIGHT", "→"),
    ("LSHIFT", "SHFT"),
    ("RSHIFT", "SHFT"),
    ("LSHFT", "SHFT"),
    ("LEFT_SHIFT", "SHFT"),
    ("LCTRL", "CTRL"),
    ("RCTRL", "CTRL"),
    ("LEFT_CONTROL", "CTRL"),
    ("LALT", "ALT"),
    ("RALT", "ALT"),
    ("LGUI", "GUI"),
    ("RGUI", "GUI"),
    ("GRAVE", "`"),
    ("MINUS", "-"),
    ("EQUAL", "="),
    ("LBKT", "["),
    ("RBKT", "]"),
    ("LBRC", "{"),
    ("RBRC", "}"),
    ("BSLH", "\\"),
    ("SEMI", ";"),
    ("SQT", "'"),
    ("COMMA", ","),
    ("DOT", "."),
    ("SLASH", "/"),
    ("FSLH", "/"),
    ("CAPS", "CAPS"),
    ("CAPSLOCK", "CAPS"),
    ("PSCRN", "PSCR"),
    ("SLCK", "SLCK"),
    ("PAUSE_BREAK", "PAUS"),
    ("LPAR", "("),
    ("RPAR", ")"),
    ("C_VOL_UP", "V+"),
    ("C_VOL_DN", "V-"),
    ("C_MUTE", "MUTE"),
    ("C_PLAY_PAUSE", "▶⏸"),
    ("C_NEXT", "⏭"),
    ("C_PREV", "⏮"),
];

/// Formats a ZMK key code identifier to a short display label.
///
/// Modifier wrappers like `LS(...)` and `RC(...)` are unwrapped recursively,
/// so nested wrappers compose outer-to-inner: `LC(LS(A))` yields `C-S-A`.
#[must_use]
pub fn format_key(key: &str) -> String {
    // Modifier wrappers: LS(), LC(), LA(), LG() and right-hand variants
    let mod_regex = Regex::new(r"^([LR][SCAG])\((.+)\)$").unwrap();
    if let Some(captures) = mod_regex.captures(key) {
        let inner = format_key(&captures[2]);
        let prefix = match &captures[1][1..] {
            "S" => "S-",
            "C" => "C-",
            "A" => "A-",
            _ => "G-",
        };
        return format!("{prefix}{inner}");
    }

    // Number keys: N1 -> 1
    if key.len() == 2 && key.starts_with('N') && key[1..].chars().all(|c| c.is_ascii_digit()) {
        return key[1..].to_string();
    }

    // Function keys F1..F12 pass through
    if key.starts_with('F') && key.len() <= 3 {
        return key.to_string();
    }

    if let Some((_, label)) = KEY_LABELS.iter().find(|(code, _)| *code == key) {
        return (*label).to_string();
    }

    // Return as-is if short enough, otherwise truncate
    if key.chars().count() <= 4 {
        key.to_string()
    } else {
        key.chars().take(4).collect()
    }
}

/// Creates a one-character label for a layer reference.
///
/// Case-insensitive over a small set of conventional layer names and their
/// numeric indices; anything else yields the upper-cased first character.
#[must_use]
pub fn format_layer_short(layer: &str) -> String {
    match layer.to_uppercase().as_str() {
        "DEFAULT" | "0" => "D".to_string(),
        "LOWER" | "1" => "L".to_string(),
        "RAISE" | "2" => "R".to_string(),
        "FN" | "3" => "F".to_string(),
        "SYSTEM" | "4" => "S".to_string(),
        _ => layer
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect()),
    }
}
