//! Rendering of the scanned tree into the `_sidebar.md` navigation file.
//!
//! Output is always exactly two levels deep: one group header per top-level
//! category, then a flat list of links for every document anywhere beneath
//! it, however deeply the source directories nest.

use crate::app::config::{SiteConfig, FALLBACK_ICON};
use crate::app::models::{CategoryMeta, Node};
use chrono::Local;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters JavaScript's `encodeURIComponent` leaves unescaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode every path segment that contains a non-ASCII character;
/// ASCII-only segments pass through unchanged.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment.is_ascii() {
                segment.to_string()
            } else {
                utf8_percent_encode(segment, COMPONENT).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Render the navigation groups: a fixed home entry, then one group per
/// top-level category. Stray top-level documents are not rendered.
pub fn render(nodes: &[Node], config: &SiteConfig) -> String {
    let mut out = String::new();
    out.push_str("* **🏠 Home**\n");
    out.push_str("  * [Home](/)\n");
    out.push('\n');

    for node in nodes {
        let Node::Category(category) = node else {
            continue;
        };
        let docs = node.documents();
        if docs.is_empty() {
            // The scanner never emits an empty category, but an empty
            // header must not appear even if it did.
            continue;
        }

        let meta = config
            .categories
            .get(&category.name)
            .cloned()
            .unwrap_or_else(|| CategoryMeta {
                name: category.name.clone(),
                icon: FALLBACK_ICON.to_string(),
            });

        out.push_str(&format!("* **{} {}**\n", meta.icon, meta.name));
        for doc in docs {
            out.push_str(&format!("  * [{}](/{})\n", doc.title, encode_path(&doc.path)));
        }
    }

    out
}

/// Full sidebar file content: generation banner plus rendered groups.
pub fn generate(nodes: &[Node], config: &SiteConfig) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        "<!--\n  🤖 Auto-generated navigation sidebar.\n  📅 Generated: {timestamp}\n\n  Run `mdnav sidebar` to regenerate.\n-->\n\n{}",
        render(nodes, config)
    )
}
