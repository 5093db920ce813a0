//! Shared types, error model, and configuration for marksmap.
//!
//! This crate is the foundation depended on by all other marksmap crates.
//! It provides:
//! - [`MarksmapError`], the unified error type
//! - Domain types ([`BookmarkNode`], [`MindMapNode`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ConvertConfig, config_dir, config_file_path, load_config, load_config_from,
};
pub use error::{MarksmapError, Result};
pub use types::{BookmarkNode, MAP_VERSION, MindMapNode, UNKNOWN_TITLE};
