//! Thumbnail URL resolution for adjacent items.
//!
//! Ordered fallback chain, first applicable rule wins:
//!
//! 1. Thumbnails disabled in config → none.
//! 2. Item has an asset base reference → asset base + configured filename.
//! 3. Item has a body → first image reference found in the raw markup, with
//!    a `format` size parameter appended.
//! 4. Otherwise none.
//!
//! The body scan is a deliberate regex heuristic, not a markup parser: it
//! takes the first textual occurrence of a `data-src="…"` (lazy-load) or
//! `src="…"` attribute. The alternation tries `data-src` first at each scan
//! position, so when both attributes sit on the same tag the lazy-load
//! source wins; otherwise whichever appears first in the byte stream does.
//! Absence of a thumbnail is a normal outcome, never an error.

use crate::config::NavConfig;
use crate::data::AdjacentItem;
use regex::Regex;
use std::sync::LazyLock;

/// First image reference in raw markup: lazy-load attribute or plain source.
static IMAGE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data-src="([^"]+)"|src="([^"]+)""#).expect("image pattern must compile")
});

/// Resolve a representative image URL for an adjacent item, if any.
pub fn resolve_thumbnail(item: &AdjacentItem, config: &NavConfig) -> Option<String> {
    if !config.show_thumbnails {
        return None;
    }

    if let Some(asset_url) = item.asset_url.as_deref().filter(|u| !u.is_empty()) {
        return Some(format!("{}{}", asset_url, config.thumbnail_filename));
    }

    if let Some(body) = &item.body {
        if let Some(url) = first_image_url(body) {
            return Some(with_format_param(url, &config.thumbnail_format));
        }
    }

    None
}

/// Extract the first image URL referenced in a markup fragment.
fn first_image_url(body: &str) -> Option<&str> {
    let captures = IMAGE_REF.captures(body)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
}

/// Append the size/format parameter, honoring an existing query string.
fn with_format_param(url: &str, format: &str) -> String {
    if url.contains('?') {
        format!("{url}&format={format}")
    } else {
        format!("{url}?format={format}")
    }
}
