//! Core conversion logic for marksmap.
//!
//! This crate ties the bookmark data model, the sanitizer, and the Freeplane
//! serializer into end-to-end conversions (e.g., `convert_file`).

pub mod mapper;
pub mod pipeline;
pub mod serializer;

pub use mapper::{MapOptions, MapStats, build, build_with_stats};
pub use pipeline::{Conversion, convert_file, convert_str, convert_value};
pub use serializer::serialize;
