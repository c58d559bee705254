use eraser_client::StoreConfig;

const DEFAULT_BASE_URL: &str = "https://eraser.example.com";

pub const SITE_NAME: &str = "Eraser";

/// Build-time settings of the site
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SiteConfig {
    /// Absolute url the site is served from, without trailing slash
    pub base_url: String,
    pub comments: StoreConfig,
}

impl SiteConfig {
    /// Reads `ERASER_SITE_URL` and `ERASER_COMMENTS_PREFIX` as set when compiling
    fn from_build_env() -> SiteConfig {
        SiteConfig::from_values(
            option_env!("ERASER_SITE_URL"),
            option_env!("ERASER_COMMENTS_PREFIX"),
        )
    }

    pub fn from_values(base_url: Option<&str>, comments_prefix: Option<&str>) -> SiteConfig {
        let base_url = match base_url {
            Some(u) if !u.is_empty() => u,
            _ => DEFAULT_BASE_URL,
        };
        SiteConfig {
            base_url: String::from(base_url.trim_end_matches('/')),
            comments: StoreConfig::with_prefix(comments_prefix),
        }
    }

    pub fn canonical(&self, path: &str) -> String {
        match path.starts_with('/') {
            true => format!("{}{}", self.base_url, path),
            false => format!("{}/{}", self.base_url, path),
        }
    }
}

lazy_static::lazy_static! {
    static ref SITE: SiteConfig = SiteConfig::from_build_env();
}

pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SiteConfig::from_values(None, None);
        assert_eq!(c.base_url, DEFAULT_BASE_URL);
        assert_eq!(c.comments, StoreConfig::default());
    }

    #[test]
    fn overrides() {
        let c = SiteConfig::from_values(Some("https://wipe.example.org/"), Some("wipe-"));
        assert_eq!(c.base_url, "https://wipe.example.org");
        assert_eq!(c.comments.key_prefix, "wipe-");
        assert_eq!(
            c.canonical("/blog/nist-800-88"),
            "https://wipe.example.org/blog/nist-800-88"
        );
        assert_eq!(c.canonical("pricing"), "https://wipe.example.org/pricing");
    }
}
