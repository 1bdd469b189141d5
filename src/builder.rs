//! Navigation assembly from resolved pagination data.
//!
//! Decides which sides are eligible and builds the
//! [`NavContainer`](crate::node::NavContainer) tree from configuration, the
//! resolved theme, and per-item thumbnails. Produces `None` when neither
//! side qualifies, in which case the caller performs no insertion at all.

use crate::config::NavConfig;
use crate::data::{AdjacentItem, Pagination};
use crate::node::{
    Direction, NavArrow, NavContainer, NavContent, NavIcon, NavLink, NavText, NavTextElement,
    NavThumbnail,
};
use crate::thumbnail::resolve_thumbnail;

/// Title shown when an adjacent item has none.
const UNTITLED: &str = "Untitled";

/// Build the navigation tree, or `None` when there is nothing to render.
///
/// Eligibility per side: the item must be present, non-empty, and carry a
/// non-empty canonical URL. Ineligible sides are skipped silently. The
/// previous arrow always precedes the next arrow.
pub fn build_navigation(
    pagination: &Pagination,
    theme: &str,
    config: &NavConfig,
) -> Option<NavContainer> {
    let mut arrows = Vec::new();

    if let Some(arrow) = build_arrow(pagination.prev_item.as_ref(), Direction::Prev, config) {
        arrows.push(arrow);
    }
    if let Some(arrow) = build_arrow(pagination.next_item.as_ref(), Direction::Next, config) {
        arrows.push(arrow);
    }

    if arrows.is_empty() {
        return None;
    }

    Some(NavContainer {
        theme: theme.to_string(),
        class: config.container_class.clone(),
        arrows,
    })
}

/// Build one arrow, or `None` when the item is ineligible.
fn build_arrow(
    item: Option<&AdjacentItem>,
    direction: Direction,
    config: &NavConfig,
) -> Option<NavArrow> {
    let item = item?;
    if item.is_empty() {
        return None;
    }
    let href = item.canonical_url()?.to_string();

    let title = item.title.clone().unwrap_or_else(|| UNTITLED.to_string());
    let (icon, label) = match direction {
        Direction::Prev => (&config.prev_icon, &config.prev_label),
        Direction::Next => (&config.next_icon, &config.next_label),
    };

    let thumbnail = resolve_thumbnail(item, config).map(|src| NavThumbnail {
        class: config.thumbnail_class.clone(),
        src,
        alt: title.clone(),
    });

    Some(NavArrow {
        direction,
        class: format!("{} {}-{}", config.arrow_class, config.arrow_class, direction.as_str()),
        link: NavLink {
            href,
            class: config.link_class.clone(),
            icon: NavIcon {
                class: config.icon_class.clone(),
                markup: icon.clone(),
            },
            content: NavContent {
                class: config.content_class.clone(),
                thumbnail,
                text: NavText {
                    class: config.text_class.clone(),
                    label: NavTextElement {
                        tag: config.label_tag.clone(),
                        class: config.label_class.clone(),
                        text: label.clone(),
                    },
                    title: NavTextElement {
                        tag: config.title_tag.clone(),
                        class: config.title_class.clone(),
                        text: title,
                    },
                },
            },
        },
    })
}
