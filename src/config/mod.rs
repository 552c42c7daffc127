//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `[site]`      | Owner metadata and homepage display limits     |
//! | `[pages]`     | Per-page title/description (home, blog, ...)   |
//! | `[[socials]]` | Ordered social platform links                  |
//! | `[extra]`     | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Alice"
//! email = "alice@example.com"
//! num_posts_on_homepage = 3
//!
//! [pages.home]
//! title = "Home"
//! description = "Welcome to my corner of the internet."
//!
//! [[socials]]
//! name = "github"
//! href = "https://github.com/alice"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```
//!
//! Every section has built-in defaults, so a missing or empty file still
//! yields a complete, valid configuration.

mod defaults;
mod error;
mod pages;
mod site;
mod socials;

// Re-export public types used by the consuming site generator
pub use pages::{Page, PageMeta, PagesConfig};
pub use site::SiteInfo;
pub use socials::Social;

use error::ConfigError;

use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Check that a string is a well-formed absolute http(s) URL.
///
/// Requires an `http://` or `https://` scheme followed by a non-empty host,
/// with no whitespace anywhere.
fn is_absolute_url(href: &str) -> bool {
    let Some(rest) = href
        .strip_prefix("https://")
        .or_else(|| href.strip_prefix("http://"))
    else {
        return false;
    };

    !rest.is_empty() && !rest.starts_with('/') && !href.chars().any(char::is_whitespace)
}

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Owner metadata and homepage display limits
    #[serde(default)]
    pub site: SiteInfo,

    /// Per-page title/description records
    #[serde(default)]
    pub pages: PagesConfig,

    /// Ordered social platform links
    #[serde(default = "defaults::socials::list")]
    #[educe(Default = defaults::socials::list())]
    pub socials: Vec<Social>,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load and validate the configuration for a site build.
    ///
    /// A missing file is not an error: the built-in defaults describe the
    /// site as shipped. A present but malformed or invalid file is.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            Self::from_path(path)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Look up a social link by platform name.
    pub fn social(&self, name: &str) -> Option<&Social> {
        self.socials.iter().find(|social| social.name == name)
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.is_empty() {
            bail!(ConfigError::Validation(
                "[site.name] must not be empty".into()
            ));
        }

        if self.site.email.is_empty() || !self.site.email.contains('@') {
            bail!(ConfigError::Validation(
                "[site.email] must be a valid email address".into()
            ));
        }

        let counts = [
            ("num_posts_on_homepage", self.site.num_posts_on_homepage),
            ("num_works_on_homepage", self.site.num_works_on_homepage),
            ("num_projects_on_homepage", self.site.num_projects_on_homepage),
        ];
        for (field, count) in counts {
            if count == 0 {
                bail!(ConfigError::Validation(format!(
                    "[site.{field}] must be a positive integer"
                )));
            }
        }

        for (page, meta) in self.pages.iter() {
            if meta.title.is_empty() {
                bail!(ConfigError::Validation(format!(
                    "[pages.{page}.title] must not be empty"
                )));
            }
            if meta.description.is_empty() {
                bail!(ConfigError::Validation(format!(
                    "[pages.{page}.description] must not be empty"
                )));
            }
        }

        let mut seen = HashSet::new();
        for social in &self.socials {
            if !is_absolute_url(&social.href) {
                bail!(ConfigError::Validation(format!(
                    "[[socials]] `{}` href must be an absolute http(s) URL",
                    social.name
                )));
            }
            if !seen.insert(social.name.as_str()) {
                bail!(ConfigError::Validation(format!(
                    "[[socials]] duplicate name `{}`",
                    social.name
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
