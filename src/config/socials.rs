//! `[[socials]]` configuration.
//!
//! Ordered list of social platform links shown in the site footer.

use serde::{Deserialize, Serialize};

/// One social platform link.
///
/// # Example
/// ```toml
/// [[socials]]
/// name = "github"
/// href = "https://github.com/alice"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Social {
    /// Platform identifier (e.g. "github"), unique within the list.
    pub name: String,

    /// Absolute URL to the profile.
    pub href: String,
}
