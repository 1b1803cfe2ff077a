//! Pure resolution of a raw declaration into a [`SiteConfig`].
//!
//! Resolution performs no I/O and is deterministic: the same raw input always
//! yields a structurally identical configuration. Declaration order is
//! preserved exactly for nav entries, sidebar groups, sections, and children.
//! Failures carry the offending field path (e.g.
//! `sidebar./vue/[1].children[2]`).

use std::collections::HashSet;

use crate::ConfigError;
use crate::model::{
    DEFAULT_PORT, DEFAULT_SIDEBAR_DEPTH, HeadTag, MarkdownOptions, NavEntry, SidebarGroup,
    SidebarItem, SidebarMap, SidebarSection, SiteConfig,
};
use crate::raw::{RawConfig, RawHeadTag, RawNavEntry, RawSidebarGroup, RawSidebarSection};

/// Resolve a raw declaration into an immutable [`SiteConfig`].
///
/// # Errors
///
/// Returns the first validation failure encountered, in declaration order:
/// - [`ConfigError::MissingField`] for an absent or empty required field
/// - [`ConfigError::MalformedPath`] for a link, base, prefix, or child
///   fragment of the wrong shape
/// - [`ConfigError::AmbiguousNavEntry`] for a nav entry declaring both
///   `link` and `items`
/// - [`ConfigError::DuplicatePrefix`] for a repeated sidebar mount prefix
pub fn resolve(raw: RawConfig) -> Result<SiteConfig, ConfigError> {
    let title = require_present(raw.title, "title")?;

    let base = raw.base.unwrap_or_else(|| "/".to_owned());
    require_mount_path(&base, "base")?;

    let head = resolve_head(raw.head)?;
    let nav = resolve_nav(raw.nav)?;
    let sidebar = resolve_sidebar(raw.sidebar)?;

    Ok(SiteConfig {
        title,
        description: raw.description.unwrap_or_default(),
        base,
        port: raw.port.unwrap_or(DEFAULT_PORT),
        last_updated: raw.last_updated,
        display_all_headers: raw.display_all_headers.unwrap_or(false),
        head,
        markdown: MarkdownOptions {
            line_numbers: raw.markdown.line_numbers.unwrap_or(false),
            sidebar_depth: raw.markdown.sidebar_depth.unwrap_or(DEFAULT_SIDEBAR_DEPTH),
        },
        nav,
        sidebar,
    })
}

/// Resolve the head tag list.
fn resolve_head(raw: Vec<RawHeadTag>) -> Result<Vec<HeadTag>, ConfigError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, tag)| {
            let name = require_present(tag.tag, &format!("head[{i}].tag"))?;
            Ok(HeadTag {
                tag: name,
                attrs: tag.attrs,
            })
        })
        .collect()
}

/// Resolve the top-level nav sequence.
fn resolve_nav(raw: Vec<RawNavEntry>) -> Result<Vec<NavEntry>, ConfigError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, entry)| resolve_nav_entry(entry, &format!("nav[{i}]")))
        .collect()
}

/// Resolve a single nav entry, recursing into group items.
///
/// A leaf declares `link`, a group declares `items`; declaring both is an
/// error rather than a silent precedence, so author mistakes surface.
fn resolve_nav_entry(raw: RawNavEntry, field: &str) -> Result<NavEntry, ConfigError> {
    let text = require_present(raw.text, &format!("{field}.text"))?;

    match (raw.link, raw.items) {
        (Some(_), Some(_)) => Err(ConfigError::AmbiguousNavEntry {
            field: field.to_owned(),
        }),
        (Some(link), None) => {
            require_link(&link, &format!("{field}.link"))?;
            Ok(NavEntry::Leaf { text, link })
        }
        (None, Some(items)) => {
            let items = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| resolve_nav_entry(item, &format!("{field}.items[{i}]")))
                .collect::<Result<_, _>>()?;
            Ok(NavEntry::Group { text, items })
        }
        (None, None) => Err(ConfigError::MissingField {
            field: format!("{field}.link"),
        }),
    }
}

/// Resolve the sidebar declarations, rejecting duplicate mount prefixes.
fn resolve_sidebar(raw: Vec<RawSidebarGroup>) -> Result<SidebarMap, ConfigError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut groups = Vec::with_capacity(raw.len());

    for (i, group) in raw.into_iter().enumerate() {
        let prefix = require_present(group.prefix, &format!("sidebar[{i}].prefix"))?;
        require_mount_path(&prefix, &format!("sidebar[{i}].prefix"))?;

        if !seen.insert(prefix.clone()) {
            return Err(ConfigError::DuplicatePrefix {
                field: format!("sidebar[{i}].prefix"),
                prefix,
            });
        }

        let sections = group
            .sections
            .into_iter()
            .enumerate()
            .map(|(j, section)| resolve_section(section, &prefix, j))
            .collect::<Result<_, _>>()?;

        groups.push(SidebarGroup { prefix, sections });
    }

    Ok(SidebarMap::new(groups))
}

/// Resolve one sidebar section, joining children onto the mount prefix.
fn resolve_section(
    raw: RawSidebarSection,
    prefix: &str,
    index: usize,
) -> Result<SidebarSection, ConfigError> {
    let field = format!("sidebar.{prefix}[{index}]");
    let title = require_present(raw.title, &format!("{field}.title"))?;

    let children = raw
        .children
        .into_iter()
        .enumerate()
        .map(|(k, fragment)| resolve_child(&fragment, prefix, &format!("{field}.children[{k}]")))
        .collect::<Result<_, _>>()?;

    Ok(SidebarSection {
        title,
        collapsable: raw.collapsable.unwrap_or(true),
        children,
    })
}

/// Resolve one child fragment against its mount prefix.
///
/// The empty fragment names the section's index document and resolves to the
/// prefix itself; the index convention (`README.md`, `index.md`, ...) is left
/// to the rendering collaborator.
fn resolve_child(fragment: &str, prefix: &str, field: &str) -> Result<SidebarItem, ConfigError> {
    if fragment.is_empty() {
        return Ok(SidebarItem {
            path: prefix.to_owned(),
            is_index: true,
        });
    }

    if fragment.starts_with('/') || is_external(fragment) {
        return Err(ConfigError::MalformedPath {
            field: field.to_owned(),
            value: fragment.to_owned(),
            expected: "path fragment relative to the mount prefix",
        });
    }

    Ok(SidebarItem {
        path: format!("{prefix}{fragment}"),
        is_index: false,
    })
}

/// Require an optional string field to be present and non-empty.
fn require_present(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField {
            field: field.to_owned(),
        }),
    }
}

/// Require a root-relative path with a trailing slash (a mount path).
pub(crate) fn require_mount_path(value: &str, field: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') || !value.ends_with('/') {
        return Err(ConfigError::MalformedPath {
            field: field.to_owned(),
            value: value.to_owned(),
            expected: "root-relative path ending in '/'",
        });
    }
    Ok(())
}

/// Require an absolute URL or a root-relative path (a nav link).
fn require_link(value: &str, field: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') && !is_external(value) {
        return Err(ConfigError::MalformedPath {
            field: field.to_owned(),
            value: value.to_owned(),
            expected: "absolute URL or root-relative path",
        });
    }
    Ok(())
}

/// True for absolute `http://`/`https://` URLs.
#[must_use]
pub fn is_external(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}
