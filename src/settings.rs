//! # Settings Module
//!
//! ## Purpose
//! Holds the run configuration for the reaction-table to Petri net converter:
//! where the input table lives, where the per-reaction artifacts go, where the
//! combined artifact goes and what the generated net is called.
//!
//! ## Key Features
//! - **Fixed Defaults**: the defaults are the historical constants of the
//!   converter (`wilmer.csv`, `junk/`, `reactions-combined.jl`, `Brusselator`),
//!   so a run with no config file needs no setup at all
//! - **Optional JSON Config**: if `PetriKinConfig.json` is present next to the
//!   binary it overrides the defaults; a malformed file falls back to the
//!   defaults with a warning instead of aborting the run
//! - **No CLI surface**: the converter takes no command line flags or
//!   environment variables, configuration goes through the file only
//!
//! ## Usage Pattern
//! ```rust
//! use PetriKin::settings::Settings;
//!
//! let settings = Settings::new();
//! assert_eq!(settings.net_name, "Brusselator");
//! ```

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// name of the optional config file searched for in the working directory
pub const CONFIG_FILE: &str = "PetriKinConfig.json";

/// Run configuration for the converter.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// tab-separated table of reactions to read
    pub input_path: String,
    /// directory receiving one artifact per accepted directed reaction
    pub output_dir: String,
    /// path of the combined artifact with all accepted reactions
    pub combined_path: String,
    /// name the generated net is bound to in the artifacts
    pub net_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: "wilmer.csv".to_string(),
            output_dir: "junk".to_string(),
            combined_path: "reactions-combined.jl".to_string(),
            net_name: "Brusselator".to_string(),
        }
    }
}

impl Settings {
    /// Loads `PetriKinConfig.json` from the working directory if it exists,
    /// otherwise returns the defaults.
    pub fn new() -> Self {
        Self::from_config_file(CONFIG_FILE)
    }

    /// Loads settings from the given JSON file, falling back to the defaults
    /// when the file is missing or does not parse.
    pub fn from_config_file(path: &str) -> Self {
        if !Path::new(path).exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("config file {} is not valid JSON ({}), using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("config file {} could not be read ({}), using defaults", path, e);
                Self::default()
            }
        }
    }
}
