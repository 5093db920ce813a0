//! End-to-end conversion: JSON → bookmark tree → mind-map tree → XML text.
//!
//! The whole document is parsed before mapping starts and the whole output
//! is rendered before anything is written, so a failure never leaves a
//! partial mind map behind.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, instrument, trace};

use marksmap_shared::{BookmarkNode, MarksmapError, Result};

use crate::mapper::{self, MapOptions, MapStats};
use crate::serializer;

/// Result of a conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The complete Freeplane document.
    pub document: String,
    /// Counters collected while mapping.
    pub stats: MapStats,
}

/// Convert an already-parsed bookmarks document.
#[instrument(skip_all)]
pub fn convert_value(value: &Value, opts: &MapOptions) -> Result<Conversion> {
    if let Value::Object(map) = value {
        // preserve_order keeps these in document order
        trace!(keys = ?map.keys().collect::<Vec<_>>(), "top-level bookmark keys");
    }

    let bookmarks = BookmarkNode::from_value(value)?;

    let mut stats = MapStats::default();
    let tree = mapper::build_with_stats(&bookmarks, true, opts, &mut stats);
    let document = serializer::serialize(&tree);

    debug!(
        nodes = stats.nodes,
        folders = stats.folders,
        links = stats.links,
        dropped_links = stats.dropped_links,
        untitled = stats.untitled,
        max_depth = stats.max_depth,
        bytes = document.len(),
        "conversion complete"
    );

    Ok(Conversion { document, stats })
}

/// Parse and convert a bookmarks document held in memory.
pub fn convert_str(json: &str, opts: &MapOptions) -> Result<Conversion> {
    let value: Value = serde_json::from_str(json)?;
    convert_value(&value, opts)
}

/// Read `source`, convert it, and write the mind map to `destination`.
#[instrument(skip_all, fields(source = %source.display(), destination = %destination.display()))]
pub fn convert_file(source: &Path, destination: &Path, opts: &MapOptions) -> Result<Conversion> {
    let json = std::fs::read_to_string(source).map_err(|e| MarksmapError::io(source, e))?;
    debug!(bytes = json.len(), "read bookmarks file");

    let conversion = convert_str(&json, opts)?;

    std::fs::write(destination, &conversion.document)
        .map_err(|e| MarksmapError::io(destination, e))?;

    info!(
        nodes = conversion.stats.nodes,
        links = conversion.stats.links,
        "mind map written"
    );

    Ok(conversion)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
