//! Typed site configuration for a personal portfolio/blog.
//!
//! The site generator reads one `folio.toml` at build start; everything here
//! is immutable from then on. When no file exists, the built-in defaults
//! describe the site as shipped.

pub mod config;

pub use config::{Page, PageMeta, PagesConfig, SiteConfig, SiteInfo, Social};
