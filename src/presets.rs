//! Currency presets for money formatting
//!
//! This module loads a small embedded table of per-currency option presets
//! (symbol, separators, precision, pattern) that callers can use as a base
//! for overrides instead of spelling out every field.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::types::{FormatOptions, FormatSpec};

/// Error type for preset operations
#[derive(Debug, Clone, PartialEq)]
pub enum PresetError {
    /// An error occurred while parsing preset data
    ParseError(String),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::ParseError(msg) => write!(f, "Error parsing preset data: {}", msg),
        }
    }
}

impl std::error::Error for PresetError {}

type Result<T> = std::result::Result<T, PresetError>;

/// Holds the currency presets parsed from the embedded TOML data
pub struct PresetManager {
    presets: HashMap<String, FormatOptions>,
}

// Global singleton for the preset table
static PRESET_MANAGER: OnceLock<PresetManager> = OnceLock::new();

impl PresetManager {
    /// Create a new preset manager with the embedded preset data
    fn new() -> Self {
        let mut manager = Self {
            presets: HashMap::new(),
        };

        // Parse and load the built-in preset data
        if let Err(e) = manager.load_embedded_data() {
            // Just log the error and continue with an empty table
            eprintln!("Failed to load embedded currency presets: {}", e);
        }

        manager
    }

    /// Load the embedded preset data from the TOML file
    fn load_embedded_data(&mut self) -> Result<()> {
        let presets_toml = include_str!("presets/currency_presets.toml");
        self.parse_presets(presets_toml)
    }

    /// Parse the preset TOML data
    fn parse_presets(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| PresetError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| PresetError::ParseError("Root is not a table".to_string()))?;

        // First load base settings if available
        let base_options = if let Some(base) = table.get("base") {
            apply_preset_fields(FormatOptions::default(), base)?
        } else {
            FormatOptions::default()
        };

        // Now load each named preset over the base
        for (name, value) in table {
            if name == "base" {
                continue; // Already handled
            }

            let options = apply_preset_fields(base_options.clone(), value)?;
            self.presets.insert(name.to_string(), options);
        }

        Ok(())
    }

    /// Get the global preset manager instance
    fn get() -> &'static Self {
        PRESET_MANAGER.get_or_init(Self::new)
    }

    /// Get a preset by its identifier
    fn get_preset(&self, name: &str) -> Option<&FormatOptions> {
        self.presets.get(name)
    }
}

/// Apply the fields of one preset TOML entry over a base options record
fn apply_preset_fields(mut options: FormatOptions, value: &toml::Value) -> Result<FormatOptions> {
    let table = value
        .as_table()
        .ok_or_else(|| PresetError::ParseError("Preset entry is not a table".to_string()))?;

    if let Some(symbol) = table.get("symbol").and_then(|v| v.as_str()) {
        options.symbol = symbol.to_string();
    }

    if let Some(decimal) = table.get("decimal").and_then(|v| v.as_str()) {
        options.decimal = decimal.to_string();
    }

    if let Some(thousand) = table.get("thousand").and_then(|v| v.as_str()) {
        options.thousand = thousand.to_string();
    }

    if let Some(precision) = table.get("precision").and_then(|v| v.as_integer()) {
        options.precision = precision.max(0) as usize;
    }

    if let Some(pattern) = table.get("pattern").and_then(|v| v.as_str()) {
        options.format = FormatSpec::Pattern(pattern.to_string());
    }

    Ok(options)
}

/// Get the options preset for a currency identifier (e.g., "usd", "eur")
pub fn preset(name: &str) -> Option<FormatOptions> {
    PresetManager::get().get_preset(name).cloned()
}

/// List all available preset identifiers
pub fn list_available_presets() -> Vec<String> {
    PresetManager::get().presets.keys().cloned().collect()
}
