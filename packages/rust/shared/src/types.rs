//! Core domain types: the bookmark tree read from JSON and the mind-map tree
//! written as Freeplane XML.

use serde_json::Value;

use crate::error::{MarksmapError, Result};

/// Display text used when a bookmark has no usable title.
pub const UNKNOWN_TITLE: &str = "UNKNOWN";

/// Format-version attribute written on the `<map>` envelope.
pub const MAP_VERSION: &str = "freeplane 1.2.0";

// ---------------------------------------------------------------------------
// BookmarkNode
// ---------------------------------------------------------------------------

/// A node of the browser's bookmark export.
///
/// Folders carry `children`, bookmarks carry `uri`; the export format does
/// not forbid a node from having both. Every other key in the source object
/// (`guid`, `dateAdded`, `typeCode`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkNode {
    /// Display title, if the source had a string `title`.
    pub title: Option<String>,
    /// Target address, if the source had a string `uri`.
    pub uri: Option<String>,
    /// Child entries in source order, if the source had a `children` array.
    pub children: Option<Vec<BookmarkNode>>,
}

impl BookmarkNode {
    /// Build the bookmark tree rooted at `value`.
    ///
    /// The top-level value must be a JSON object. Below the root, fields of
    /// the wrong type count as absent and a non-object `children` entry
    /// becomes an empty node, so one malformed entry never aborts the tree.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(_) => Ok(Self::from_value_lenient(value)),
            other => Err(MarksmapError::invalid_input(format!(
                "top-level bookmarks value must be an object, found {}",
                json_kind(other)
            ))),
        }
    }

    fn from_value_lenient(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let text_field = |key: &str| map.get(key).and_then(Value::as_str).map(String::from);

        let children = map
            .get("children")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(Self::from_value_lenient).collect());

        Self {
            title: text_field("title"),
            uri: text_field("uri"),
            children,
        }
    }

    /// Whether this entry has a `children` array (possibly empty).
    pub fn is_folder(&self) -> bool {
        self.children.is_some()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// MindMapNode
// ---------------------------------------------------------------------------

/// A Freeplane `<node>` ready for serialization.
///
/// `text` and `link` already hold escaped attribute content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MindMapNode {
    /// Escaped `TEXT` attribute; never empty.
    pub text: String,
    /// Escaped `LINK` attribute of a validated URL.
    pub link: Option<String>,
    /// Child nodes in source order.
    pub children: Vec<MindMapNode>,
    /// Whether this node is wrapped in the `<map>` envelope.
    pub is_root: bool,
}
