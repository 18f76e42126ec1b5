//! # Page visit shape.
//!
//! [`Page`] describes one page view for `page` fan-outs, following the
//! Segment page spec's properties. A bare URL string converts into a page
//! with no title or referrer, which is what makes
//! `dispatcher.page("https://…")` work.
//!
//! # Example
//! ```
//! use crosslytics::Page;
//!
//! let page = Page::new("https://crosslead.com")
//!     .with_title("Homepage");
//!
//! assert_eq!(page.url, "https://crosslead.com");
//! assert_eq!(Page::from("https://crosslead.com").url, page.url);
//! ```

use serde::{Deserialize, Serialize};

/// One page visit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Full URL of the page. Typically `location.href` in a browser context.
    pub url: String,
    /// Title of the page. Typically `document.title` in a browser context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Full URL of the previous page. Typically `document.referrer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}

impl Page {
    /// Creates a page visit with only a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            referrer: None,
        }
    }

    /// Sets the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the previous page's URL.
    #[must_use]
    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }
}

impl From<&str> for Page {
    fn from(url: &str) -> Self {
        Page::new(url)
    }
}

impl From<String> for Page {
    fn from(url: String) -> Self {
        Page::new(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_string_is_url_only() {
        let sugar: Page = "https://example.com".into();
        let explicit = Page::new("https://example.com");
        assert_eq!(sugar, explicit);
        assert_eq!(sugar.title, None);
        assert_eq!(sugar.referrer, None);
    }

    #[test]
    fn test_builders_set_optionals() {
        let page = Page::new("https://example.com/a")
            .with_title("A")
            .with_referrer("https://example.com");
        assert_eq!(page.title.as_deref(), Some("A"));
        assert_eq!(page.referrer.as_deref(), Some("https://example.com"));
    }
}
