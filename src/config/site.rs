//! `[site]` section configuration.
//!
//! Global metadata describing the site owner and homepage display limits.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in folio.toml - global site metadata.
///
/// # Example
/// ```toml
/// [site]
/// name = "Alice"
/// email = "alice@example.com"
/// num_posts_on_homepage = 3
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Site owner name, shown in headers and page footers.
    #[serde(default = "defaults::site::name")]
    #[educe(Default = defaults::site::name())]
    pub name: String,

    /// Contact email for the site footer and `mailto:` links.
    #[serde(default = "defaults::site::email")]
    #[educe(Default = defaults::site::email())]
    pub email: String,

    /// How many blog posts the homepage listing shows.
    #[serde(default = "defaults::site::num_posts_on_homepage")]
    #[educe(Default = defaults::site::num_posts_on_homepage())]
    pub num_posts_on_homepage: usize,

    /// How many work/experience items the homepage listing shows.
    #[serde(default = "defaults::site::num_works_on_homepage")]
    #[educe(Default = defaults::site::num_works_on_homepage())]
    pub num_works_on_homepage: usize,

    /// How many projects the homepage listing shows.
    #[serde(default = "defaults::site::num_projects_on_homepage")]
    #[educe(Default = defaults::site::num_projects_on_homepage())]
    pub num_projects_on_homepage: usize,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_site_info_full() {
        let config = r#"
            [site]
            name = "Alice"
            email = "alice@example.com"
            num_posts_on_homepage = 5
            num_works_on_homepage = 4
            num_projects_on_homepage = 6
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.name, "Alice");
        assert_eq!(config.site.email, "alice@example.com");
        assert_eq!(config.site.num_posts_on_homepage, 5);
        assert_eq!(config.site.num_works_on_homepage, 4);
        assert_eq!(config.site.num_projects_on_homepage, 6);
    }

    #[test]
    fn test_site_info_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.site.name, "Zacherina");
        assert_eq!(config.site.email, "22am014@sctce.ac.in");
        assert_eq!(config.site.num_posts_on_homepage, 3);
        assert_eq!(config.site.num_works_on_homepage, 2);
        assert_eq!(config.site.num_projects_on_homepage, 3);
    }

    #[test]
    fn test_site_info_partial_override() {
        let config = r#"
            [site]
            num_posts_on_homepage = 10
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        // overridden
        assert_eq!(config.site.num_posts_on_homepage, 10);
        // the rest keep defaults
        assert_eq!(config.site.name, "Zacherina");
        assert_eq!(config.site.num_works_on_homepage, 2);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [site]
            name = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_site_info_negative_count_rejected() {
        let config = r#"
            [site]
            num_posts_on_homepage = -1
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        // usize cannot hold a negative value, deserialization fails
        assert!(result.is_err());
    }

    #[test]
    fn test_site_info_unicode_name() {
        let config = r#"
            [site]
            name = "René 🚀"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.site.name, "René 🚀");
    }
}
