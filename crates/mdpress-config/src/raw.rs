//! Raw configuration shapes as parsed from `mdpress.toml`.
//!
//! Every field is optional at this layer; [`resolve`](crate::resolve) enforces
//! presence, mutual exclusion, and path shape, and reports the offending field
//! path on failure.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Raw site declaration as parsed from TOML.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Site title.
    pub title: Option<String>,
    /// Site description.
    pub description: Option<String>,
    /// Root-relative base path the site is served under (e.g. `/dist/`).
    pub base: Option<String>,
    /// Preview server port.
    pub port: Option<u16>,
    /// Label for the last-updated timestamp, `None` disables the display.
    pub last_updated: Option<String>,
    /// Show heading links for all pages in the sidebar.
    pub display_all_headers: Option<bool>,
    /// Extra tags injected into `<head>` on every page.
    pub head: Vec<RawHeadTag>,
    /// Markdown rendering options.
    pub markdown: RawMarkdownOptions,
    /// Top-level navigation entries, in display order.
    pub nav: Vec<RawNavEntry>,
    /// Sidebar declarations, one group per mount prefix, in display order.
    pub sidebar: Vec<RawSidebarGroup>,
}

/// Raw navigation entry.
///
/// A leaf declares `link`, a group declares `items`. Declaring both is
/// rejected during resolution rather than silently preferring one.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawNavEntry {
    /// Display text.
    pub text: Option<String>,
    /// Link target (absolute URL or root-relative path).
    pub link: Option<String>,
    /// Child entries for a dropdown group.
    pub items: Option<Vec<RawNavEntry>>,
}

/// Raw head tag declaration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawHeadTag {
    /// Tag name (e.g. `link`, `meta`).
    pub tag: Option<String>,
    /// Tag attributes.
    pub attrs: BTreeMap<String, String>,
}

/// Raw markdown rendering options.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawMarkdownOptions {
    /// Show line numbers in code blocks.
    pub line_numbers: Option<bool>,
    /// Heading depth rendered in the sidebar.
    pub sidebar_depth: Option<u8>,
}

/// Raw sidebar group: the sections mounted under one path prefix.
///
/// Declared as an ordered array of tables rather than a TOML table keyed by
/// prefix, so that duplicate prefixes survive parsing and the resolver can
/// reject them with a field path.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSidebarGroup {
    /// Mount prefix (root-relative, trailing slash, e.g. `/guide/`).
    pub prefix: Option<String>,
    /// Sections shown when a document under the prefix is open.
    pub sections: Vec<RawSidebarSection>,
}

/// Raw sidebar section.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSidebarSection {
    /// Section heading.
    pub title: Option<String>,
    /// Whether the section can be collapsed.
    pub collapsable: Option<bool>,
    /// Document path fragments relative to the group's mount prefix.
    /// The empty string refers to the section's index document.
    pub children: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_declaration() {
        let raw: RawConfig = toml::from_str("").unwrap();
        assert!(raw.title.is_none());
        assert!(raw.nav.is_empty());
        assert!(raw.sidebar.is_empty());
    }

    #[test]
    fn test_parse_scalars() {
        let toml = r#"
title = "Handbook"
description = "A handbook"
base = "/dist/"
port = 8082
last_updated = "Last updated"
display_all_headers = true
"#;
        let raw: RawConfig = toml::from_str(toml).unwrap();
        assert_eq!(raw.title.as_deref(), Some("Handbook"));
        assert_eq!(raw.base.as_deref(), Some("/dist/"));
        assert_eq!(raw.port, Some(8082));
        assert_eq!(raw.last_updated.as_deref(), Some("Last updated"));
        assert_eq!(raw.display_all_headers, Some(true));
    }

    #[test]
    fn test_parse_nav_leaf_and_group() {
        let toml = r#"
[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "Guides"

[[nav.items]]
text = "Markdown"
link = "/markdown/"
"#;
        let raw: RawConfig = toml::from_str(toml).unwrap();
        assert_eq!(raw.nav.len(), 2);
        assert_eq!(raw.nav[0].link.as_deref(), Some("/"));
        assert!(raw.nav[0].items.is_none());
        let items = raw.nav[1].items.as_ref().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text.as_deref(), Some("Markdown"));
    }

    #[test]
    fn test_parse_sidebar_groups_preserve_order() {
        let toml = r#"
[[sidebar]]
prefix = "/guide/"

[[sidebar.sections]]
title = "Guide"
collapsable = false
children = ["", "setup"]

[[sidebar]]
prefix = "/api/"

[[sidebar.sections]]
title = "API"
children = ["overview"]
"#;
        let raw: RawConfig = toml::from_str(toml).unwrap();
        assert_eq!(raw.sidebar.len(), 2);
        assert_eq!(raw.sidebar[0].prefix.as_deref(), Some("/guide/"));
        assert_eq!(raw.sidebar[0].sections[0].children, vec!["", "setup"]);
        assert_eq!(raw.sidebar[1].prefix.as_deref(), Some("/api/"));
    }

    #[test]
    fn test_parse_head_tags() {
        let toml = r#"
[[head]]
tag = "link"

[head.attrs]
rel = "icon"
href = "/images/favicon.png"
"#;
        let raw: RawConfig = toml::from_str(toml).unwrap();
        assert_eq!(raw.head.len(), 1);
        assert_eq!(raw.head[0].tag.as_deref(), Some("link"));
        assert_eq!(raw.head[0].attrs["rel"], "icon");
        assert_eq!(raw.head[0].attrs["href"], "/images/favicon.png");
    }

    #[test]
    fn test_parse_markdown_options() {
        let toml = r#"
[markdown]
line_numbers = true
sidebar_depth = 3
"#;
        let raw: RawConfig = toml::from_str(toml).unwrap();
        assert_eq!(raw.markdown.line_numbers, Some(true));
        assert_eq!(raw.markdown.sidebar_depth, Some(3));
    }
}
