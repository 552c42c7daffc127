//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization. They also
//! carry the built-in site constants, so a missing `folio.toml` still yields
//! a fully described site.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn name() -> String {
        "Zacherina".into()
    }

    pub fn email() -> String {
        "22am014@sctce.ac.in".into()
    }

    pub fn num_posts_on_homepage() -> usize {
        3
    }

    pub fn num_works_on_homepage() -> usize {
        2
    }

    pub fn num_projects_on_homepage() -> usize {
        3
    }
}

// ============================================================================
// [pages] Section Defaults
// ============================================================================

pub mod pages {
    use super::super::pages::PageMeta;

    pub fn home() -> PageMeta {
        PageMeta {
            title: "Home".into(),
            description: "Zacherina is a software engineer who loves breaking and building things."
                .into(),
        }
    }

    pub fn blog() -> PageMeta {
        PageMeta {
            title: "Blog".into(),
            description: "Random thoughts and interesting ideas worth sharing.".into(),
        }
    }

    pub fn work() -> PageMeta {
        PageMeta {
            title: "Experience".into(),
            description: "My professional journey and experiences.".into(),
        }
    }

    pub fn projects() -> PageMeta {
        PageMeta {
            title: "Projects".into(),
            description: "Cool Projects ig idk man.".into(),
        }
    }
}

// ============================================================================
// [[socials]] Defaults
// ============================================================================

pub mod socials {
    use super::super::socials::Social;

    pub fn list() -> Vec<Social> {
        vec![
            Social {
                name: "discord".into(),
                href: "https://discordapp.com/users/1093592290959818764".into(),
            },
            Social {
                name: "github".into(),
                href: "https://github.com/kekmatime".into(),
            },
            Social {
                name: "linkedin".into(),
                href: "https://www.linkedin.com/in/ananth-prathap".into(),
            },
        ]
    }
}
