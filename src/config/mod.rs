//! Configuration module for bidmaster.
//!
//! Provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//!
//! # Configuration File
//!
//! Place a `.bidmaster.yaml` file in your project root or `~/.config/bidmaster/`:
//!
//! ```yaml
//! analysis:
//!   default_weight_percent: 70
//! output:
//!   format: json
//!   no_color: false
//! ```

pub mod file;
mod types;

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
pub use types::{AnalysisConfig, AppConfig, OutputConfig};
