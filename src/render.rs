//! Markup serialization of the navigation tree.
//!
//! HTML is generated with [maud](https://maud.lambda.xyz/): type-safe
//! templates with automatic escaping. The [`Renderer`] trait keeps the
//! backend replaceable — assembly produces a plain tree, and only this
//! module knows how it becomes markup.
//!
//! Two values bypass auto-escaping on purpose: the configured icon fragments
//! (raw markup by contract) and the label/title wrapper tags, whose element
//! names come from configuration and are emitted verbatim. The `html!` macro
//! only accepts static element names, so those two leaf elements are written
//! through an explicit [`maud::Escaper`] — their class and text content are
//! still escaped, only the tag name passes through.

use crate::node::{NavArrow, NavContainer, NavContent, NavTextElement};
use maud::{Escaper, Markup, PreEscaped, html};
use std::fmt::Write;

/// Serializes a navigation tree to the host's markup language.
pub trait Renderer {
    fn render(&self, nav: &NavContainer) -> String;
}

/// Default HTML renderer.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, nav: &NavContainer) -> String {
        container(nav).into_string()
    }
}

fn container(nav: &NavContainer) -> Markup {
    html! {
        div class=(nav.class) data-section-theme=(nav.theme) {
            @for arrow in &nav.arrows {
                (arrow_block(arrow))
            }
        }
    }
}

fn arrow_block(arrow: &NavArrow) -> Markup {
    let link = &arrow.link;
    html! {
        div class=(arrow.class) {
            a href=(link.href) class=(link.class) {
                div class=(link.icon.class) {
                    (PreEscaped(&link.icon.markup))
                }
                (content_block(&link.content))
            }
        }
    }
}

fn content_block(content: &NavContent) -> Markup {
    html! {
        div class=(content.class) {
            @if let Some(thumb) = &content.thumbnail {
                div class=(thumb.class) {
                    img src=(thumb.src) alt=(thumb.alt) loading="lazy";
                }
            }
            div class=(content.text.class) {
                (text_element(&content.text.label))
                (text_element(&content.text.title))
            }
        }
    }
}

/// Render a leaf text element with a configured tag name.
fn text_element(el: &NavTextElement) -> Markup {
    let mut out = String::new();
    out.push('<');
    out.push_str(&el.tag);
    out.push_str(" class=\"");
    let _ = Escaper::new(&mut out).write_str(&el.class);
    out.push_str("\">");
    let _ = Escaper::new(&mut out).write_str(&el.text);
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
    PreEscaped(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_navigation;
    use crate::config::NavConfig;
    use crate::data::{AdjacentItem, Pagination};

    fn sample_nav(config: &NavConfig) -> NavContainer {
        let pagination = Pagination {
            prev_item: Some(AdjacentItem {
                title: Some("First Post".to_string()),
                full_url: Some("/journal/first".to_string()),
                asset_url: Some("https://x/img/".to_string()),
                body: None,
            }),
            next_item: Some(AdjacentItem {
                title: Some("Third Post".to_string()),
                full_url: Some("/journal/third".to_string()),
                asset_url: None,
                body: None,
            }),
        };
        build_navigation(&pagination, "dark", config).unwrap()
    }

    #[test]
    fn container_carries_theme_attribute() {
        let config = NavConfig::default();
        let html = HtmlRenderer.render(&sample_nav(&config));
        assert!(html.starts_with(r#"<div class="blog-nav-container" data-section-theme="dark">"#));
    }

    #[test]
    fn arrows_render_in_order_with_hrefs() {
        let config = NavConfig::default();
        let html = HtmlRenderer.render(&sample_nav(&config));
        let prev = html.find("blog-nav-arrow-prev").unwrap();
        let next = html.find("blog-nav-arrow-next").unwrap();
        assert!(prev < next);
        assert!(html.contains(r#"<a href="/journal/first" class="blog-nav-link">"#));
        assert!(html.contains(r#"<a href="/journal/third" class="blog-nav-link">"#));
    }

    #[test]
    fn icon_markup_passes_through_raw() {
        let config = NavConfig {
            prev_icon: r#"<svg viewBox="0 0 24 24"></svg>"#.to_string(),
            ..Default::default()
        };
        let html = HtmlRenderer.render(&sample_nav(&config));
        assert!(html.contains(r#"<svg viewBox="0 0 24 24"></svg>"#));
    }

    #[test]
    fn thumbnail_renders_lazy_image_with_alt() {
        let config = NavConfig::default();
        let html = HtmlRenderer.render(&sample_nav(&config));
        assert!(html.contains(
            r#"<img src="https://x/img/thumbnail.jpg" alt="First Post" loading="lazy">"#
        ));
    }

    #[test]
    fn arrow_without_thumbnail_has_no_image() {
        let config = NavConfig {
            show_thumbnails: false,
            ..Default::default()
        };
        let html = HtmlRenderer.render(&sample_nav(&config));
        assert!(!html.contains("<img"));
        assert!(!html.contains("blog-nav-thumbnail"));
    }

    #[test]
    fn label_and_title_use_configured_tags() {
        let config = NavConfig {
            label_tag: "span".to_string(),
            title_tag: "h2".to_string(),
            ..Default::default()
        };
        let html = HtmlRenderer.render(&sample_nav(&config));
        assert!(html.contains(r#"<span class="blog-nav-label">Previous</span>"#));
        assert!(html.contains(r#"<h2 class="blog-nav-title">First Post</h2>"#));
    }

    #[test]
    fn titles_are_escaped() {
        let config = NavConfig::default();
        let pagination = Pagination {
            prev_item: Some(AdjacentItem {
                title: Some(r#"Tips & <Tricks>"#.to_string()),
                full_url: Some("/tips".to_string()),
                asset_url: None,
                body: None,
            }),
            next_item: None,
        };
        let nav = build_navigation(&pagination, "white", &config).unwrap();
        let html = HtmlRenderer.render(&nav);
        assert!(html.contains("Tips &amp; &lt;Tricks&gt;"));
        assert!(!html.contains("<Tricks>"));
    }

    #[test]
    fn text_element_escapes_class_and_text() {
        let el = NavTextElement {
            tag: "p".to_string(),
            class: r#"a"b"#.to_string(),
            text: "x < y".to_string(),
        };
        assert_eq!(
            text_element(&el).into_string(),
            r#"<p class="a&quot;b">x &lt; y</p>"#
        );
    }
}
