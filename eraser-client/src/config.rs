pub const DEFAULT_KEY_PREFIX: &str = "comments-";

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Prepended to the content id to form the storage key of its thread
    pub key_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> StoreConfig {
        StoreConfig {
            key_prefix: String::from(DEFAULT_KEY_PREFIX),
        }
    }
}

impl StoreConfig {
    /// Uses `prefix` when set and non-empty, the default otherwise
    pub fn with_prefix(prefix: Option<&str>) -> StoreConfig {
        match prefix {
            Some(p) if !p.is_empty() => StoreConfig {
                key_prefix: String::from(p),
            },
            _ => StoreConfig::default(),
        }
    }
}
