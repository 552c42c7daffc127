//! `[pages]` section configuration.
//!
//! Per-page title/description pairs used for page headers and SEO meta tags.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Blog,
    Work,
    Projects,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Page::Home => "home",
            Page::Blog => "blog",
            Page::Work => "work",
            Page::Projects => "projects",
        })
    }
}

/// Title/description pair for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageMeta {
    /// Page title, used in the browser tab and `<h1>`.
    pub title: String,

    /// Page description for SEO meta tags.
    pub description: String,
}

/// `[pages]` section in folio.toml - one metadata record per logical page.
///
/// # Example
/// ```toml
/// [pages.home]
/// title = "Home"
/// description = "Welcome to my corner of the internet."
///
/// [pages.blog]
/// title = "Blog"
/// description = "Notes and essays."
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct PagesConfig {
    #[serde(default = "defaults::pages::home")]
    #[educe(Default = defaults::pages::home())]
    pub home: PageMeta,

    #[serde(default = "defaults::pages::blog")]
    #[educe(Default = defaults::pages::blog())]
    pub blog: PageMeta,

    #[serde(default = "defaults::pages::work")]
    #[educe(Default = defaults::pages::work())]
    pub work: PageMeta,

    #[serde(default = "defaults::pages::projects")]
    #[educe(Default = defaults::pages::projects())]
    pub projects: PageMeta,
}

impl PagesConfig {
    /// Get the metadata record for a logical page.
    pub fn get(&self, page: Page) -> &PageMeta {
        match page {
            Page::Home => &self.home,
            Page::Blog => &self.blog,
            Page::Work => &self.work,
            Page::Projects => &self.projects,
        }
    }

    /// Iterate all (page, metadata) records in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Page, &PageMeta)> {
        [Page::Home, Page::Blog, Page::Work, Page::Projects]
            .into_iter()
            .map(|page| (page, self.get(page)))
    }
}
