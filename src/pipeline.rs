//! Pipeline orchestration.
//!
//! Wires the stages together in their fixed order: fetch the page's
//! structured data, resolve the theme, build the navigation tree, render it,
//! insert it. The run is strictly sequential and happens at most once —
//! [`Pipeline::run`] consumes the pipeline, so a second invocation is not
//! representable. The host decides *when* to call it; this crate only
//! guarantees it cannot happen twice.
//!
//! ## Failure policy
//!
//! Navigation is a non-critical augmentation, so every failure is absorbed
//! here: a diagnostic is emitted and the run reports an [`AugmentOutcome`]
//! instead of an error. On any outcome other than `Inserted` the host
//! document is untouched. Nothing in this module panics or propagates an
//! error to the caller.

use crate::builder::build_navigation;
use crate::config::NavConfig;
use crate::fetch::{Fetch, fetch_page_data};
use crate::page::HtmlPage;
use crate::render::{HtmlRenderer, Renderer};
use crate::theme::resolve_theme;
use tracing::{debug, error, info};

/// What a pipeline run did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AugmentOutcome {
    /// Navigation was built and inserted, with this many arrows.
    Inserted { arrows: usize },
    /// The structured data carried no pagination object.
    NoPagination,
    /// Pagination was present but neither side was eligible.
    NothingToRender,
    /// Retrieval or parsing of the structured data failed.
    Failed,
}

impl AugmentOutcome {
    /// True when the document was mutated.
    pub fn inserted(&self) -> bool {
        matches!(self, AugmentOutcome::Inserted { .. })
    }
}

/// A single-use navigation pipeline.
pub struct Pipeline {
    config: NavConfig,
    renderer: Box<dyn Renderer>,
}

impl Pipeline {
    /// Pipeline with the default HTML renderer.
    pub fn new(config: NavConfig) -> Self {
        Self::with_renderer(config, Box::new(HtmlRenderer))
    }

    /// Pipeline with a caller-supplied renderer.
    pub fn with_renderer(config: NavConfig, renderer: Box<dyn Renderer>) -> Self {
        Self { config, renderer }
    }

    /// Run the pipeline once against a parsed page.
    ///
    /// `page_url` is the page's own address; the structured-data URL is
    /// derived from it. Consumes the pipeline: one run per page.
    pub fn run(self, page: &HtmlPage, page_url: &str, fetcher: &dyn Fetch) -> AugmentOutcome {
        let data = match fetch_page_data(fetcher, page_url) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to fetch page data: {err}");
                return AugmentOutcome::Failed;
            }
        };

        let Some(pagination) = data.pagination else {
            debug!("no pagination data available");
            return AugmentOutcome::NoPagination;
        };

        let theme = resolve_theme(&self.config, page);

        let Some(nav) = build_navigation(&pagination, &theme, &self.config) else {
            debug!("no eligible adjacent items, nothing to render");
            return AugmentOutcome::NothingToRender;
        };

        let arrows = nav.arrows.len();
        let markup = self.renderer.render(&nav);
        page.insert(&markup, &self.config.append_to, &self.config.insert_position);
        info!(arrows, theme = %theme, "navigation inserted");
        AugmentOutcome::Inserted { arrows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use url::Url;

    struct StubFetcher(Result<&'static str, u16>);

    impl Fetch for StubFetcher {
        fn fetch(&self, _url: &Url) -> Result<String, FetchError> {
            match self.0 {
                Ok(body) => Ok(body.to_string()),
                Err(status) => Err(FetchError::Status(status)),
            }
        }
    }

    const PAGE: &str = r#"<html><body>
        <div id="sections"><section data-section-theme="light"><p>post</p></section></div>
    </body></html>"#;

    const BOTH_ITEMS: &str = r#"{
        "pagination": {
            "prevItem": {"title": "First", "fullUrl": "/first"},
            "nextItem": {"title": "Third", "fullUrl": "/third"}
        }
    }"#;

    fn run(page: &HtmlPage, body: Result<&'static str, u16>) -> AugmentOutcome {
        let fetcher = StubFetcher(body);
        Pipeline::new(NavConfig::default()).run(page, "https://example.com/second", &fetcher)
    }

    #[test]
    fn inserts_navigation_for_eligible_items() {
        let page = HtmlPage::parse(PAGE);
        let outcome = run(&page, Ok(BOTH_ITEMS));
        assert_eq!(outcome, AugmentOutcome::Inserted { arrows: 2 });
        assert!(outcome.inserted());

        let html = page.to_html().unwrap();
        assert!(html.contains(r#"href="/first""#));
        assert!(html.contains(r#"href="/third""#));
        // Page annotation flowed into the container
        assert!(html.contains(r#"data-section-theme="light"><div class="blog-nav-arrow"#));
    }

    #[test]
    fn fetch_failure_leaves_page_untouched() {
        let page = HtmlPage::parse(PAGE);
        let before = page.to_html().unwrap();
        let outcome = run(&page, Err(503));
        assert_eq!(outcome, AugmentOutcome::Failed);
        assert_eq!(page.to_html().unwrap(), before);
    }

    #[test]
    fn malformed_data_leaves_page_untouched() {
        let page = HtmlPage::parse(PAGE);
        let before = page.to_html().unwrap();
        let outcome = run(&page, Ok("not json"));
        assert_eq!(outcome, AugmentOutcome::Failed);
        assert_eq!(page.to_html().unwrap(), before);
    }

    #[test]
    fn missing_pagination_is_a_quiet_no_op() {
        let page = HtmlPage::parse(PAGE);
        let before = page.to_html().unwrap();
        let outcome = run(&page, Ok(r#"{"collection": {}}"#));
        assert_eq!(outcome, AugmentOutcome::NoPagination);
        assert_eq!(page.to_html().unwrap(), before);
    }

    #[test]
    fn ineligible_items_insert_nothing() {
        let page = HtmlPage::parse(PAGE);
        let before = page.to_html().unwrap();
        let outcome = run(
            &page,
            Ok(r#"{"pagination": {"prevItem": {}, "nextItem": {"title": "No URL"}}}"#),
        );
        assert_eq!(outcome, AugmentOutcome::NothingToRender);
        assert_eq!(page.to_html().unwrap(), before);
    }

    #[test]
    fn single_eligible_side_inserts_one_arrow() {
        let page = HtmlPage::parse(PAGE);
        let outcome = run(
            &page,
            Ok(r#"{"pagination": {"nextItem": {"title": "Third", "fullUrl": "/third"}}}"#),
        );
        assert_eq!(outcome, AugmentOutcome::Inserted { arrows: 1 });
        let html = page.to_html().unwrap();
        assert!(html.contains("blog-nav-arrow-next"));
        assert!(!html.contains("blog-nav-arrow-prev"));
    }

    #[test]
    fn config_theme_override_wins_in_markup() {
        let page = HtmlPage::parse(PAGE);
        let config = NavConfig {
            section_theme: Some("dark".to_string()),
            ..Default::default()
        };
        let fetcher = StubFetcher(Ok(BOTH_ITEMS));
        let outcome =
            Pipeline::new(config).run(&page, "https://example.com/second", &fetcher);
        assert!(outcome.inserted());
        let html = page.to_html().unwrap();
        assert!(html.contains(r#"<div class="blog-nav-container" data-section-theme="dark">"#));
    }

    #[test]
    fn insert_position_before_is_honored() {
        let page = HtmlPage::parse(PAGE);
        let config = NavConfig {
            insert_position: "before".to_string(),
            ..Default::default()
        };
        let fetcher = StubFetcher(Ok(BOTH_ITEMS));
        Pipeline::new(config).run(&page, "https://example.com/second", &fetcher);
        let html = page.to_html().unwrap();
        let container = html.find("blog-nav-container").unwrap();
        let target = html.find(r#"id="sections""#).unwrap();
        assert!(container < target);
    }
}
