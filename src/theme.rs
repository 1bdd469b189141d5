//! Visual theme resolution.
//!
//! The navigation container carries a theme token so the site's styling can
//! match it to the surrounding page. Strict precedence, first match wins:
//!
//! 1. Explicit `section_theme` in configuration.
//! 2. The theme annotation on the page's first primary section element.
//! 3. `"white"`.
//!
//! Always yields a token; there is no failure path.

use crate::config::NavConfig;
use crate::page::HtmlPage;

/// Where the page annotates its own theme.
const SECTION_SELECTOR: &str = "#sections > section";
const THEME_ATTRIBUTE: &str = "data-section-theme";

/// Token used when neither configuration nor the page specifies a theme.
const FALLBACK_THEME: &str = "white";

/// Resolve the theme token for the navigation container.
pub fn resolve_theme(config: &NavConfig, page: &HtmlPage) -> String {
    if let Some(theme) = config.section_theme.as_deref().filter(|t| !t.is_empty()) {
        return theme.to_string();
    }
    if let Some(theme) = page.attribute(SECTION_SELECTOR, THEME_ATTRIBUTE) {
        return theme;
    }
    FALLBACK_THEME.to_string()
}
