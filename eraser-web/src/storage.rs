use anyhow::anyhow;
use eraser_client::Storage;
use gloo_storage::{LocalStorage, Storage as _};

/// The browser's `localStorage`, shared by every tab of the site
///
/// Concurrent tabs are not coordinated: the last one to write a key wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%key, ?err, "failed reading from local storage");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| anyhow!("writing {key:?} to local storage: {err:?}"))
    }
}
