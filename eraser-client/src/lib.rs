mod config;
pub use config::{StoreConfig, DEFAULT_KEY_PREFIX};

mod reply_box;
pub use reply_box::ReplyBox;

mod storage;
pub use storage::{MemoryStorage, Storage};

mod store;
pub use store::{CommentStore, Mutation};

mod thread;
pub use thread::Thread;

mod fuzz;

pub mod api {
    pub use eraser_api::*;
}
