//! Structured page data returned by the platform's JSON endpoint.
//!
//! A rendered blog post exposes a JSON representation of itself at the same
//! URL with `?format=json` appended. The only part this crate reads is the
//! `pagination` object, which carries metadata for the neighboring posts in
//! the collection. Everything is deserialized fresh per run and discarded
//! after rendering; nothing here is persisted.
//!
//! All fields are optional: the endpoint omits, nulls, or empties them
//! freely, and an absent or hollow item is a normal condition handled by the
//! builder's eligibility rule, not an error.

use serde::Deserialize;

/// The slice of the endpoint response this crate consumes.
///
/// Unknown keys (the endpoint returns many) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageData {
    /// Sibling metadata for the current post. Absent when the page is not
    /// part of a paginated collection.
    pub pagination: Option<Pagination>,
}

/// Previous/next sibling metadata.
///
/// Either side may be absent (first/last post of a collection) or present
/// but hollow (an empty object).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub prev_item: Option<AdjacentItem>,
    pub next_item: Option<AdjacentItem>,
}

/// One neighboring post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjacentItem {
    /// Post title; arrows fall back to a placeholder when absent.
    pub title: Option<String>,
    /// Canonical URL of the post. Required for the item to produce an arrow.
    pub full_url: Option<String>,
    /// Asset base reference (trailing slash by endpoint contract); preferred
    /// source for the thumbnail.
    pub asset_url: Option<String>,
    /// Raw post body markup. Only scanned when no asset reference exists.
    pub body: Option<String>,
}

impl AdjacentItem {
    /// True when no field is populated — the endpoint's `{}` placeholder.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.full_url.is_none()
            && self.asset_url.is_none()
            && self.body.is_none()
    }

    /// The item's canonical URL, if present and non-empty.
    pub fn canonical_url(&self) -> Option<&str> {
        self.full_url.as_deref().filter(|url| !url.is_empty())
    }
}
