//! In-memory navigation tree.
//!
//! One typed node per structural role: container → arrow → link → icon /
//! content → thumbnail / text. The tree is assembled from resolved data
//! without touching any document, then serialized by a
//! [`Renderer`](crate::render::Renderer) — assembly stays testable on its
//! own, and the markup backend is replaceable.

/// Which side of the current post an arrow points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Class-name suffix for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Prev => "prev",
            Direction::Next => "next",
        }
    }
}

/// Root of the navigation block: up to two arrows, previous first.
#[derive(Debug, Clone, PartialEq)]
pub struct NavContainer {
    /// Resolved theme token, emitted as a `data-section-theme` attribute.
    pub theme: String,
    pub class: String,
    pub arrows: Vec<NavArrow>,
}

/// One directional arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct NavArrow {
    pub direction: Direction,
    /// Combined base and direction class, e.g. `blog-nav-arrow blog-nav-arrow-prev`.
    pub class: String,
    pub link: NavLink,
}

/// The anchor wrapping an arrow's icon and content.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub href: String,
    pub class: String,
    pub icon: NavIcon,
    pub content: NavContent,
}

/// Icon block; the markup fragment is caller-supplied and rendered raw.
#[derive(Debug, Clone, PartialEq)]
pub struct NavIcon {
    pub class: String,
    pub markup: String,
}

/// Content block: optional thumbnail plus the text block.
#[derive(Debug, Clone, PartialEq)]
pub struct NavContent {
    pub class: String,
    pub thumbnail: Option<NavThumbnail>,
    pub text: NavText,
}

/// Thumbnail image for an arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct NavThumbnail {
    pub class: String,
    pub src: String,
    /// Alternative text; mirrors the arrow's title.
    pub alt: String,
}

/// Text block: direction label above the post title.
#[derive(Debug, Clone, PartialEq)]
pub struct NavText {
    pub class: String,
    pub label: NavTextElement,
    pub title: NavTextElement,
}

/// A leaf text element with a configurable tag name.
#[derive(Debug, Clone, PartialEq)]
pub struct NavTextElement {
    /// Element name, e.g. `p` or `h3`. Emitted verbatim.
    pub tag: String,
    pub class: String,
    pub text: String,
}
