//! Bookmark tree → mind-map tree.
//!
//! Walks a [`BookmarkNode`] tree once, resolving every optional field to its
//! rendered value: escaped title or the `UNKNOWN` sentinel, escaped link or
//! nothing, and the recursively mapped children in source order.

use tracing::debug;

use marksmap_sanitize::{escape_text, escape_url, validate_url};
use marksmap_shared::{AppConfig, BookmarkNode, MindMapNode, UNKNOWN_TITLE};

/// Options for the mapping pass.
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Emit a debug event for every URI the validator rejects.
    pub log_dropped_links: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            log_dropped_links: true,
        }
    }
}

impl From<&AppConfig> for MapOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            log_dropped_links: config.convert.log_dropped_links,
        }
    }
}

/// Counters collected while mapping a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapStats {
    /// Total nodes mapped, root included.
    pub nodes: usize,
    /// Nodes that had a `children` array.
    pub folders: usize,
    /// URIs that became links.
    pub links: usize,
    /// URIs rejected by the validator.
    pub dropped_links: usize,
    /// Nodes rendered with the sentinel text.
    pub untitled: usize,
    /// Depth of the deepest node (the root is depth 0).
    pub max_depth: usize,
}

/// Map a bookmark tree to a mind-map tree.
pub fn build(node: &BookmarkNode, is_root: bool) -> MindMapNode {
    let mut stats = MapStats::default();
    build_with_stats(node, is_root, &MapOptions::default(), &mut stats)
}

/// Map a bookmark tree, accumulating counters into `stats`.
///
/// Recursion depth equals tree depth.
pub fn build_with_stats(
    node: &BookmarkNode,
    is_root: bool,
    opts: &MapOptions,
    stats: &mut MapStats,
) -> MindMapNode {
    build_node(node, is_root, 0, opts, stats)
}

fn build_node(
    node: &BookmarkNode,
    is_root: bool,
    depth: usize,
    opts: &MapOptions,
    stats: &mut MapStats,
) -> MindMapNode {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);

    let text = match node.title.as_deref().map(escape_text) {
        Some(text) if !text.is_empty() => text,
        _ => {
            stats.untitled += 1;
            UNKNOWN_TITLE.to_string()
        }
    };

    let link = node.uri.as_deref().and_then(|uri| match validate_url(uri) {
        Ok(()) => {
            stats.links += 1;
            Some(escape_url(uri))
        }
        Err(reason) => {
            stats.dropped_links += 1;
            if opts.log_dropped_links {
                debug!(uri, %reason, title = %text, "dropping bookmark link");
            }
            None
        }
    });

    if node.is_folder() {
        stats.folders += 1;
    }

    let children = node
        .children
        .iter()
        .flatten()
        .map(|child| build_node(child, false, depth + 1, opts, stats))
        .collect();

    MindMapNode {
        text,
        link,
        children,
        is_root,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(title: Option<&str>, uri: Option<&str>) -> BookmarkNode {
        BookmarkNode {
            title: title.map(String::from),
            uri: uri.map(String::from),
            children: None,
        }
    }

    fn folder(title: &str, children: Vec<BookmarkNode>) -> BookmarkNode {
        BookmarkNode {
            title: Some(title.into()),
            uri: None,
            children: Some(children),
        }
    }

    #[test]
    fn maps_title_link_and_children() {
        let tree = folder(
            "Root",
            vec![
                bookmark(Some("A"), Some("http://example.com")),
                bookmark(Some("B"), None),
            ],
        );

        let mapped = build(&tree, true);
        assert!(mapped.is_root);
        assert_eq!(mapped.text, "Root");
        assert!(mapped.link.is_none());
        assert_eq!(mapped.children.len(), 2);

        let a = &mapped.children[0];
        assert_eq!(a.text, "A");
        assert_eq!(a.link.as_deref(), Some("http://example.com"));
        assert!(!a.is_root);

        let b = &mapped.children[1];
        assert_eq!(b.text, "B");
        assert!(b.link.is_none());
    }

    #[test]
    fn missing_or_empty_title_uses_sentinel() {
        assert_eq!(build(&bookmark(None, None), false).text, "UNKNOWN");
        assert_eq!(build(&bookmark(Some(""), None), false).text, "UNKNOWN");
        // whitespace is still a title
        assert_eq!(build(&bookmark(Some(" "), None), false).text, " ");
    }

    #[test]
    fn title_is_escaped() {
        let mapped = build(&bookmark(Some("Q&A <Ünïcode>"), None), false);
        assert_eq!(mapped.text, "Q&amp;A &lt;&#xdc;n&#xef;code&gt;");
    }

    #[test]
    fn invalid_uri_is_dropped() {
        let mapped = build(&bookmark(Some("Bad"), Some("not-a-url")), false);
        assert!(mapped.link.is_none());

        let mapped = build(&bookmark(Some("Smart"), Some("place:sort=8&maxResults=10")), false);
        assert!(mapped.link.is_none());
    }

    #[test]
    fn link_is_escaped() {
        let mapped = build(
            &bookmark(Some("Search"), Some("https://example.com/?a=1&b=2")),
            false,
        );
        assert_eq!(
            mapped.link.as_deref(),
            Some("https://example.com/?a=1&amp;b=2")
        );
    }

    #[test]
    fn node_with_both_uri_and_children_keeps_both() {
        let mut node = folder("Both", vec![bookmark(Some("child"), None)]);
        node.uri = Some("https://example.org".into());

        let mapped = build(&node, false);
        assert_eq!(mapped.link.as_deref(), Some("https://example.org"));
        assert_eq!(mapped.children.len(), 1);
    }

    #[test]
    fn children_order_is_preserved() {
        let names = ["zeta", "alpha", "mu", "beta"];
        let tree = folder(
            "Root",
            names.iter().map(|n| bookmark(Some(*n), None)).collect(),
        );

        let mapped = build(&tree, true);
        let texts: Vec<&str> = mapped.children.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, names);
    }

    #[test]
    fn only_the_top_node_is_root() {
        let tree = folder("Root", vec![folder("Inner", vec![bookmark(Some("leaf"), None)])]);
        let mapped = build(&tree, true);
        assert!(mapped.is_root);
        assert!(!mapped.children[0].is_root);
        assert!(!mapped.children[0].children[0].is_root);
    }

    #[test]
    fn stats_count_everything() {
        let tree = folder(
            "Root",
            vec![
                bookmark(Some("ok"), Some("https://example.com")),
                bookmark(Some("bad"), Some("javascript:void(0)")),
                folder("", vec![bookmark(None, Some("http://localhost:8080"))]),
                folder("empty", vec![]),
            ],
        );

        let mut stats = MapStats::default();
        build_with_stats(&tree, true, &MapOptions::default(), &mut stats);
        assert_eq!(
            stats,
            MapStats {
                nodes: 6,
                folders: 3,
                links: 2,
                dropped_links: 1,
                untitled: 2,
                max_depth: 2,
            }
        );
    }

    #[test]
    fn folders_are_nodes_with_a_children_array() {
        let mut linked_folder = folder("linked", vec![]);
        linked_folder.uri = Some("https://example.com".into());
        let tree = folder(
            "Root",
            vec![linked_folder, bookmark(Some("leaf"), Some("https://example.org"))],
        );

        let mut stats = MapStats::default();
        let mapped = build_with_stats(&tree, true, &MapOptions::default(), &mut stats);
        assert_eq!(stats.folders, 2);
        assert_eq!(stats.links, 2);
        assert!(mapped.children[0].children.is_empty());
    }

    #[test]
    fn options_follow_config() {
        let mut config = AppConfig::default();
        assert!(MapOptions::from(&config).log_dropped_links);

        config.convert.log_dropped_links = false;
        assert!(!MapOptions::from(&config).log_dropped_links);
    }
}
