//! Navigation configuration.
//!
//! Handles loading and resolving navigation settings. Resolution is a shallow
//! merge: a fully-populated [`NavConfig`] holds the stock defaults, and an
//! all-optional [`NavOverrides`] record replaces whole values for any key the
//! caller supplies. Keys absent from the overrides keep their defaults; there
//! is no partial merging of individual values.
//!
//! ## Config File
//!
//! Overrides load from a TOML file passed to the CLI via `--config`:
//!
//! ```toml
//! # All keys are optional - defaults shown in `blog-nav gen-config`
//! prev_label = "Older"
//! next_label = "Newer"
//! show_thumbnails = false
//! insert_position = "before"
//! append_to = "#content"
//! ```
//!
//! Unknown keys are rejected to catch typos early. Values themselves are not
//! validated: a nonsensical class name or tag name propagates verbatim into
//! the produced markup and is the caller's responsibility.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Default chevron icon markup, pointing left (previous).
pub const PREV_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m15 18-6-6 6-6"/></svg>"#;

/// Default chevron icon markup, pointing right (next).
pub const NEXT_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m9 18 6-6-6-6"/></svg>"#;

/// Fully-resolved navigation settings.
///
/// Every field is populated; construct one with [`NavConfig::resolve`] to
/// layer caller overrides on top of the stock defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NavConfig {
    /// Label shown above the previous-post title.
    pub prev_label: String,
    /// Label shown above the next-post title.
    pub next_label: String,
    /// Whether arrows carry a thumbnail image at all.
    pub show_thumbnails: bool,
    /// Value of the `format` query parameter appended to body-extracted
    /// thumbnail URLs (a platform size hint such as `300w`).
    pub thumbnail_format: String,
    /// Filename appended to an item's asset base URL.
    pub thumbnail_filename: String,
    /// Raw markup for the previous-direction icon.
    pub prev_icon: String,
    /// Raw markup for the next-direction icon.
    pub next_icon: String,
    pub container_class: String,
    pub arrow_class: String,
    pub link_class: String,
    pub icon_class: String,
    pub content_class: String,
    pub thumbnail_class: String,
    pub text_class: String,
    pub label_class: String,
    /// Element name wrapping the direction label.
    pub label_tag: String,
    pub title_class: String,
    /// Element name wrapping the post title.
    pub title_tag: String,
    /// CSS selector locating the insertion target.
    pub append_to: String,
    /// Placement relative to the target: `prepend`, `before`, or anything
    /// else (including the default `append`) for last-child insertion.
    pub insert_position: String,
    /// Explicit theme token. When set, skips page-level theme detection.
    pub section_theme: Option<String>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            prev_label: "Previous".to_string(),
            next_label: "Next".to_string(),
            show_thumbnails: true,
            thumbnail_format: "300w".to_string(),
            thumbnail_filename: "thumbnail.jpg".to_string(),
            prev_icon: PREV_ICON.to_string(),
            next_icon: NEXT_ICON.to_string(),
            container_class: "blog-nav-container".to_string(),
            arrow_class: "blog-nav-arrow".to_string(),
            link_class: "blog-nav-link".to_string(),
            icon_class: "blog-nav-arrow-icon".to_string(),
            content_class: "blog-nav-content".to_string(),
            thumbnail_class: "blog-nav-thumbnail".to_string(),
            text_class: "blog-nav-text".to_string(),
            label_class: "blog-nav-label".to_string(),
            label_tag: "p".to_string(),
            title_class: "blog-nav-title".to_string(),
            title_tag: "h3".to_string(),
            append_to: "#sections".to_string(),
            insert_position: "append".to_string(),
            section_theme: None,
        }
    }
}

impl NavConfig {
    /// Resolve a full configuration from optional caller overrides.
    ///
    /// Shallow merge: each override key present replaces the default value
    /// entirely; absent keys keep their defaults.
    pub fn resolve(overrides: Option<NavOverrides>) -> Self {
        let o = overrides.unwrap_or_default();
        let d = Self::default();
        Self {
            prev_label: o.prev_label.unwrap_or(d.prev_label),
            next_label: o.next_label.unwrap_or(d.next_label),
            show_thumbnails: o.show_thumbnails.unwrap_or(d.show_thumbnails),
            thumbnail_format: o.thumbnail_format.unwrap_or(d.thumbnail_format),
            thumbnail_filename: o.thumbnail_filename.unwrap_or(d.thumbnail_filename),
            prev_icon: o.prev_icon.unwrap_or(d.prev_icon),
            next_icon: o.next_icon.unwrap_or(d.next_icon),
            container_class: o.container_class.unwrap_or(d.container_class),
            arrow_class: o.arrow_class.unwrap_or(d.arrow_class),
            link_class: o.link_class.unwrap_or(d.link_class),
            icon_class: o.icon_class.unwrap_or(d.icon_class),
            content_class: o.content_class.unwrap_or(d.content_class),
            thumbnail_class: o.thumbnail_class.unwrap_or(d.thumbnail_class),
            text_class: o.text_class.unwrap_or(d.text_class),
            label_class: o.label_class.unwrap_or(d.label_class),
            label_tag: o.label_tag.unwrap_or(d.label_tag),
            title_class: o.title_class.unwrap_or(d.title_class),
            title_tag: o.title_tag.unwrap_or(d.title_tag),
            append_to: o.append_to.unwrap_or(d.append_to),
            insert_position: o.insert_position.unwrap_or(d.insert_position),
            section_theme: o.section_theme.or(d.section_theme),
        }
    }
}

/// Caller-supplied configuration: every key optional.
///
/// This is the explicit injection surface — the pipeline never consults any
/// ambient or global state for settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavOverrides {
    pub prev_label: Option<String>,
    pub next_label: Option<String>,
    pub show_thumbnails: Option<bool>,
    pub thumbnail_format: Option<String>,
    pub thumbnail_filename: Option<String>,
    pub prev_icon: Option<String>,
    pub next_icon: Option<String>,
    pub container_class: Option<String>,
    pub arrow_class: Option<String>,
    pub link_class: Option<String>,
    pub icon_class: Option<String>,
    pub content_class: Option<String>,
    pub thumbnail_class: Option<String>,
    pub text_class: Option<String>,
    pub label_class: Option<String>,
    pub label_tag: Option<String>,
    pub title_class: Option<String>,
    pub title_tag: Option<String>,
    pub append_to: Option<String>,
    pub insert_position: Option<String>,
    pub section_theme: Option<String>,
}

/// Load overrides from a TOML file.
///
/// The file must exist — this is only called for an explicitly-passed
/// `--config` path.
pub fn load_overrides(path: &Path) -> Result<NavOverrides, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overrides: NavOverrides = toml::from_str(&content)?;
    Ok(overrides)
}

/// Returns a fully-commented stock config TOML with all keys and defaults.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# blog-nav Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Keys you set replace the default
# value entirely; unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Labels
# ---------------------------------------------------------------------------
prev_label = "Previous"
next_label = "Next"

# ---------------------------------------------------------------------------
# Thumbnails
# ---------------------------------------------------------------------------
# Set to false to render text-only arrows.
show_thumbnails = true

# Size hint appended as ?format=... to thumbnails extracted from post bodies.
thumbnail_format = "300w"

# Filename appended to an item's asset base URL.
thumbnail_filename = "thumbnail.jpg"

# ---------------------------------------------------------------------------
# Icons (raw markup, inserted unescaped)
# ---------------------------------------------------------------------------
prev_icon = '<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m15 18-6-6 6-6"/></svg>'
next_icon = '<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m9 18 6-6-6-6"/></svg>'

# ---------------------------------------------------------------------------
# CSS classes and tag names (emitted verbatim)
# ---------------------------------------------------------------------------
container_class = "blog-nav-container"
arrow_class = "blog-nav-arrow"
link_class = "blog-nav-link"
icon_class = "blog-nav-arrow-icon"
content_class = "blog-nav-content"
thumbnail_class = "blog-nav-thumbnail"
text_class = "blog-nav-text"
label_class = "blog-nav-label"
label_tag = "p"
title_class = "blog-nav-title"
title_tag = "h3"

# ---------------------------------------------------------------------------
# Insertion
# ---------------------------------------------------------------------------
# CSS selector for the insertion target. Falls back to <body> if it matches
# nothing in the page.
append_to = "#sections"

# "append" (last child), "prepend" (first child), or "before" (preceding
# sibling of the target). Unrecognized values behave like "append".
insert_position = "append"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
# Explicit theme token for the container. When unset, the theme is read from
# the page's first section element, falling back to "white".
# section_theme = "dark"
"##
}
