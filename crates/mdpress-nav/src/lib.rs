//! Navigation binding for mdpress.
//!
//! Turns a resolved [`SiteConfig`] plus the current document path into the
//! view a rendering collaborator displays: the top navigation tree with
//! active-state marking, the sidebar sections selected by longest-prefix
//! match, and the rendering flags the page needs. Hrefs are prefixed with the
//! site base; external URLs pass through untouched.
//!
//! Binding is deterministic and order-preserving. It performs no I/O: sidebar
//! items carry resolved document paths, and mapping an index path to
//! `README.md`/`index.md` stays with the renderer.

use mdpress_config::{NavEntry, SidebarSection, SiteConfig, is_external};
use serde::Serialize;

/// A bound navigation item for the UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display text.
    pub text: String,
    /// Link target with the site base applied. `None` for dropdown groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// True when this item (or any descendant) matches the current document.
    pub active: bool,
    /// Child items for dropdown groups.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// A bound sidebar link.
///
/// Display text comes from the target document itself (its first heading),
/// which is the renderer's concern; the binding carries paths only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    /// Resolved root-relative document path (no base applied).
    pub path: String,
    /// Link target with the site base applied.
    pub href: String,
    /// True when this link names the section's index document.
    pub is_index: bool,
    /// True when this link matches the current document.
    pub active: bool,
}

/// A bound sidebar section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    /// Section heading.
    pub title: String,
    /// Whether the section can be collapsed.
    pub collapsable: bool,
    /// Links in declaration order.
    pub items: Vec<SidebarLink>,
}

/// The complete navigation view for one page render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageNav {
    /// Top navigation, in declaration order.
    pub nav: Vec<NavItem>,
    /// Sidebar sections for the matched mount prefix, empty when no prefix
    /// matches the current document.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<SidebarView>,
    /// Heading depth rendered in the sidebar.
    pub sidebar_depth: u8,
    /// Label for the last-updated timestamp, `None` disables the display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Show line numbers in code blocks.
    pub line_numbers: bool,
}

/// Bind the navigation view for a document path.
///
/// `doc_path` is the root-relative path of the document being rendered
/// (e.g. `/guide/setup`, `/` for the home page), without the site base.
#[must_use]
pub fn bind(config: &SiteConfig, doc_path: &str) -> PageNav {
    let nav = config
        .nav
        .iter()
        .map(|entry| bind_entry(config, entry, doc_path))
        .collect();

    let sidebar = match config.sidebar.sections_for(doc_path) {
        Some(group) => {
            tracing::info!(prefix = %group.prefix, page = %doc_path, "sidebar scope matched");
            group
                .sections
                .iter()
                .map(|section| bind_section(config, section, doc_path))
                .collect()
        }
        None => {
            tracing::info!(page = %doc_path, "no sidebar scope for page");
            Vec::new()
        }
    };

    PageNav {
        nav,
        sidebar,
        sidebar_depth: config.markdown.sidebar_depth,
        last_updated: config.last_updated.clone(),
        line_numbers: config.markdown.line_numbers,
    }
}

/// Bind one nav entry, recursing into groups.
fn bind_entry(config: &SiteConfig, entry: &NavEntry, doc_path: &str) -> NavItem {
    match entry {
        NavEntry::Leaf { text, link } => {
            let external = is_external(link);
            NavItem {
                text: text.clone(),
                href: Some(if external {
                    link.clone()
                } else {
                    config.url(link)
                }),
                active: !external && is_active(link, doc_path),
                children: Vec::new(),
            }
        }
        NavEntry::Group { text, items } => {
            let children: Vec<NavItem> = items
                .iter()
                .map(|item| bind_entry(config, item, doc_path))
                .collect();
            NavItem {
                text: text.clone(),
                href: None,
                active: children.iter().any(|child| child.active),
                children,
            }
        }
    }
}

/// Bind one sidebar section.
fn bind_section(config: &SiteConfig, section: &SidebarSection, doc_path: &str) -> SidebarView {
    SidebarView {
        title: section.title.clone(),
        collapsable: section.collapsable,
        items: section
            .children
            .iter()
            .map(|child| SidebarLink {
                path: child.path.clone(),
                href: config.url(&child.path),
                is_index: child.is_index,
                active: child.path == doc_path,
            })
            .collect(),
    }
}

/// True when a document path falls under an internal link target.
///
/// A link matches its own path exactly; a link with a trailing slash also
/// matches every document beneath it. The root link `/` matches only the
/// home page so it does not light up on every render.
fn is_active(link: &str, doc_path: &str) -> bool {
    if link == doc_path {
        return true;
    }
    link != "/" && link.ends_with('/') && doc_path.starts_with(link)
}
