//! Mind-map tree → Freeplane XML text.
//!
//! Output layout:
//! ```text
//! <map version="freeplane 1.2.0">
//! <node TEXT="Root">
//! <node TEXT="A" LINK="http://example.com"/>
//! <node TEXT="B"/>
//! </node>
//! </map>
//! ```
//! No indentation and no trailing newline. Attribute values are written as
//! stored; the mapper has already escaped them.

use marksmap_shared::{MAP_VERSION, MindMapNode};

/// Serialize a mind-map tree. A root node is wrapped in the `<map>` envelope.
pub fn serialize(node: &MindMapNode) -> String {
    let mut out = String::new();

    if node.is_root {
        out.push_str("<map version=\"");
        out.push_str(MAP_VERSION);
        out.push_str("\">\n");
        write_node(node, &mut out);
        out.push_str("\n</map>");
    } else {
        write_node(node, &mut out);
    }

    out
}

fn write_node(node: &MindMapNode, out: &mut String) {
    out.push_str("<node TEXT=\"");
    out.push_str(&node.text);
    out.push('"');

    if let Some(link) = &node.link {
        out.push_str(" LINK=\"");
        out.push_str(link);
        out.push('"');
    }

    if node.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push_str(">\n");
    for (i, child) in node.children.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_node(child, out);
    }
    out.push_str("\n</node>");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
