//! Configuration file parsing for beavertail
//!
//! Supports `<config_dir>/beavertail/config.toml` (or an explicit path)
//! with command-line overrides applied on top.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, resolve_config_path, try_load_settings,
};
pub use types::*;
