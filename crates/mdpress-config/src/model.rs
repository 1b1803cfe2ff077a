//! Resolved site configuration model.
//!
//! The types here are produced by [`resolve`](crate::resolve) and are
//! immutable thereafter. A [`SiteConfig`] is constructed once at startup and
//! shared read-only with every page render; all sequences keep declaration
//! order, which is meaningful (it controls displayed order).

use std::collections::BTreeMap;

/// Default preview server port when the declaration omits one.
pub const DEFAULT_PORT: u16 = 8080;

/// Default heading depth rendered in the sidebar.
pub const DEFAULT_SIDEBAR_DEPTH: u8 = 1;

/// A resolved navigation entry: either a plain link or a dropdown group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEntry {
    /// A link to a document or an external URL.
    Leaf {
        /// Display text.
        text: String,
        /// Absolute URL or root-relative document path.
        link: String,
    },
    /// A dropdown group of entries.
    Group {
        /// Display text.
        text: String,
        /// Child entries, in declaration order.
        items: Vec<NavEntry>,
    },
}

impl NavEntry {
    /// Display text of this entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Leaf { text, .. } | Self::Group { text, .. } => text,
        }
    }
}

/// A resolved sidebar child: a document path under a mount prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    /// Root-relative document path (mount prefix joined with the declared
    /// fragment). For index items this is the prefix itself; mapping it to
    /// `README.md`/`index.md` is the renderer's concern.
    pub path: String,
    /// True when the declared fragment was empty (the section's index).
    pub is_index: bool,
}

/// A resolved sidebar section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarSection {
    /// Section heading.
    pub title: String,
    /// Whether the section can be collapsed.
    pub collapsable: bool,
    /// Resolved children, in declaration order.
    pub children: Vec<SidebarItem>,
}

/// Sidebar sections mounted under one path prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarGroup {
    /// Mount prefix (root-relative, trailing slash).
    pub prefix: String,
    /// Sections, in declaration order.
    pub sections: Vec<SidebarSection>,
}

/// Ordered mapping from mount prefix to sidebar sections.
///
/// Lookup is by longest-prefix match: given prefixes `/guide/` and
/// `/guide/advanced/`, a document at `/guide/advanced/tips` resolves against
/// the latter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarMap {
    groups: Vec<SidebarGroup>,
}

impl SidebarMap {
    /// Create a map from groups in declaration order.
    ///
    /// Prefix uniqueness is enforced by the resolver, not here.
    #[must_use]
    pub fn new(groups: Vec<SidebarGroup>) -> Self {
        Self { groups }
    }

    /// All groups, in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[SidebarGroup] {
        &self.groups
    }

    /// Number of declared groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no groups are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Find the group whose prefix is the longest match for a document path.
    ///
    /// Returns `None` when no prefix matches.
    #[must_use]
    pub fn sections_for(&self, doc_path: &str) -> Option<&SidebarGroup> {
        self.groups
            .iter()
            .filter(|group| doc_path.starts_with(&group.prefix))
            .max_by_key(|group| group.prefix.len())
    }
}

/// A tag injected into `<head>` on every page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    /// Tag name (e.g. `link`, `meta`).
    pub tag: String,
    /// Tag attributes, in sorted order for deterministic output.
    pub attrs: BTreeMap<String, String>,
}

/// Markdown rendering options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Show line numbers in code blocks.
    pub line_numbers: bool,
    /// Heading depth rendered in the sidebar.
    pub sidebar_depth: u8,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            line_numbers: false,
            sidebar_depth: DEFAULT_SIDEBAR_DEPTH,
        }
    }
}

/// Resolved, immutable site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Root-relative base path the site is served under, with trailing slash.
    pub base: String,
    /// Preview server port.
    pub port: u16,
    /// Label for the last-updated timestamp, `None` disables the display.
    pub last_updated: Option<String>,
    /// Show heading links for all pages in the sidebar.
    pub display_all_headers: bool,
    /// Extra head tags, in declaration order.
    pub head: Vec<HeadTag>,
    /// Markdown rendering options.
    pub markdown: MarkdownOptions,
    /// Top-level navigation, in declaration order.
    pub nav: Vec<NavEntry>,
    /// Sidebar declarations keyed by mount prefix.
    pub sidebar: SidebarMap,
}

impl SiteConfig {
    /// Prefix a root-relative path with the site base.
    ///
    /// With `base = "/dist/"`, `/images/logo.png` becomes
    /// `/dist/images/logo.png`. The default base `/` leaves paths unchanged.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let trimmed = self.base.strip_suffix('/').unwrap_or(&self.base);
        format!("{trimmed}{path}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn group(prefix: &str) -> SidebarGroup {
        SidebarGroup {
            prefix: prefix.to_owned(),
            sections: Vec::new(),
        }
    }

    fn config_with_base(base: &str) -> SiteConfig {
        SiteConfig {
            title: "Test".to_owned(),
            description: String::new(),
            base: base.to_owned(),
            port: DEFAULT_PORT,
            last_updated: None,
            display_all_headers: false,
            head: Vec::new(),
            markdown: MarkdownOptions::default(),
            nav: Vec::new(),
            sidebar: SidebarMap::default(),
        }
    }

    #[test]
    fn test_sections_for_picks_longest_prefix() {
        let map = SidebarMap::new(vec![group("/vue/"), group("/vue/组件/")]);

        let matched = map.sections_for("/vue/组件/组件分类").unwrap();

        assert_eq!(matched.prefix, "/vue/组件/");
    }

    #[test]
    fn test_sections_for_shorter_prefix_still_matches() {
        let map = SidebarMap::new(vec![group("/vue/"), group("/vue/组件/")]);

        let matched = map.sections_for("/vue/课程安排").unwrap();

        assert_eq!(matched.prefix, "/vue/");
    }

    #[test]
    fn test_sections_for_matches_prefix_itself() {
        let map = SidebarMap::new(vec![group("/markdown/")]);

        let matched = map.sections_for("/markdown/").unwrap();

        assert_eq!(matched.prefix, "/markdown/");
    }

    #[test]
    fn test_sections_for_no_match_returns_none() {
        let map = SidebarMap::new(vec![group("/guide/")]);

        assert!(map.sections_for("/api/overview").is_none());
    }

    #[test]
    fn test_sections_for_empty_map_returns_none() {
        let map = SidebarMap::default();

        assert!(map.sections_for("/guide/").is_none());
    }

    #[test]
    fn test_url_prefixes_with_base() {
        let config = config_with_base("/dist/");

        assert_eq!(config.url("/images/logo.png"), "/dist/images/logo.png");
        assert_eq!(config.url("/markdown/"), "/dist/markdown/");
    }

    #[test]
    fn test_url_root_base_leaves_path_unchanged() {
        let config = config_with_base("/");

        assert_eq!(config.url("/guide/setup"), "/guide/setup");
        assert_eq!(config.url("/"), "/");
    }

    #[test]
    fn test_nav_entry_text_accessor() {
        let leaf = NavEntry::Leaf {
            text: "Home".to_owned(),
            link: "/".to_owned(),
        };
        let grp = NavEntry::Group {
            text: "Guides".to_owned(),
            items: vec![leaf.clone()],
        };

        assert_eq!(leaf.text(), "Home");
        assert_eq!(grp.text(), "Guides");
    }

    #[test]
    fn test_markdown_options_defaults() {
        let options = MarkdownOptions::default();

        assert!(!options.line_numbers);
        assert_eq!(options.sidebar_depth, DEFAULT_SIDEBAR_DEPTH);
    }
}
