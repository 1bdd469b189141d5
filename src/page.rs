//! Host document access.
//!
//! [`HtmlPage`] wraps a parsed HTML tree (kuchiki) and is the only place the
//! pipeline touches the document: one read (the theme annotation probe) and
//! one write (placing the rendered navigation block). Target resolution and
//! placement follow the insertion policy:
//!
//! - the configured locator is a CSS selector; when it matches nothing the
//!   target falls back to the document `body`
//! - `prepend` inserts before the target's first child
//! - `before` inserts as the target's immediately preceding sibling
//! - any other mode, including the default `append`, inserts as the last child
//!
//! Insertion never fails: a parentless `before` target degrades to `append`,
//! and a page without a `body` (not producible by the HTML parser, but
//! handled anyway) receives the block at the document root.

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;
use tracing::debug;

/// A parsed host document.
pub struct HtmlPage {
    document: NodeRef,
}

impl HtmlPage {
    /// Parse a page from its HTML text.
    pub fn parse(html: &str) -> Self {
        Self {
            document: kuchiki::parse_html().one(html),
        }
    }

    /// Read an attribute from the first element matching `selector`.
    ///
    /// Returns `None` when nothing matches, the attribute is absent, or its
    /// value is empty.
    pub fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        let element = self.document.select_first(selector).ok()?;
        let attributes = element.attributes.borrow();
        attributes
            .get(name)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Insert a markup fragment relative to the element matched by
    /// `target_selector`, per the insertion mode.
    pub fn insert(&self, markup: &str, target_selector: &str, position: &str) {
        let target = self.resolve_target(target_selector);
        self.insert_at(&target, markup, position);
    }

    /// Insert a markup fragment relative to a concrete node.
    pub fn insert_at(&self, target: &NodeRef, markup: &str, position: &str) {
        let Some(node) = parse_fragment(markup) else {
            debug!("empty navigation fragment, nothing to insert");
            return;
        };

        match position {
            "prepend" => target.prepend(node),
            "before" => {
                if target.parent().is_some() {
                    target.insert_before(node);
                } else {
                    debug!("insertion target has no parent, appending instead");
                    target.append(node);
                }
            }
            _ => target.append(node),
        }
    }

    /// Resolve the insertion target: selector match, else `body`, else the
    /// document root.
    fn resolve_target(&self, selector: &str) -> NodeRef {
        if let Ok(element) = self.document.select_first(selector) {
            return element.as_node().clone();
        }
        debug!(selector, "insertion target not found, falling back to body");
        match self.document.select_first("body") {
            Ok(body) => body.as_node().clone(),
            Err(()) => self.document.clone(),
        }
    }

    /// Serialize the document back to HTML text.
    pub fn to_html(&self) -> std::io::Result<String> {
        let mut out = Vec::new();
        self.document.serialize(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// Parse a markup fragment into a detached node.
///
/// The fragment is parsed as a document and its first `body` child taken,
/// so a single top-level element comes back as exactly that element.
fn parse_fragment(markup: &str) -> Option<NodeRef> {
    let document = kuchiki::parse_html().one(markup);
    let body = document.select_first("body").ok()?;
    let node = body.as_node().first_child()?;
    node.detach();
    Some(node)
}
