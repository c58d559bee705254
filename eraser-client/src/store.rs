use anyhow::Context;
use serde::Deserialize;

use crate::{
    api::{Comment, CommentId, ContentId, Error, NewComment},
    Storage, StoreConfig, Thread,
};

/// Result of a mutation on a thread
///
/// `thread` is always the up-to-date value to display, even when it could not
/// be written back to storage.
#[derive(Debug)]
#[must_use]
pub struct Mutation {
    pub thread: Thread,

    /// false if the targeted comment did not exist, in which case nothing was written
    pub changed: bool,

    /// Set if the updated thread could not be saved
    pub persist_error: Option<anyhow::Error>,
}

impl Mutation {
    fn unchanged(thread: Thread) -> Mutation {
        Mutation {
            thread,
            changed: false,
            persist_error: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.changed && self.persist_error.is_none()
    }
}

/// Threaded comments for any number of content ids, saved into `S`
pub struct CommentStore<S> {
    storage: S,
    config: StoreConfig,
}

impl<S: Storage> CommentStore<S> {
    pub fn new(storage: S) -> CommentStore<S> {
        CommentStore::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: S, config: StoreConfig) -> CommentStore<S> {
        CommentStore { storage, config }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key_for(&self, content: &ContentId) -> String {
        format!("{}{}", self.config.key_prefix, content)
    }

    /// Never fails: anything that cannot be read back is treated as an empty thread
    pub fn load(&self, content: &ContentId) -> Thread {
        let key = self.key_for(content);
        let raw = match self.storage.get(&key) {
            Some(raw) => raw,
            None => {
                tracing::trace!(%key, "no saved comment thread");
                return Thread::new();
            }
        };
        match parse_thread(&raw) {
            Ok(thread) if thread.has_unique_ids() => {
                tracing::debug!(%key, total = thread.total(), "loaded comment thread");
                thread
            }
            Ok(_) => {
                tracing::warn!(%key, "saved comment thread has duplicate ids, ignoring it");
                Thread::new()
            }
            Err(err) => {
                tracing::warn!(%key, ?err, "failed parsing saved comment thread, ignoring it");
                Thread::new()
            }
        }
    }

    pub fn add_top_level_comment(
        &mut self,
        content: &ContentId,
        thread: &Thread,
        new: NewComment,
    ) -> Result<Mutation, Error> {
        let comment = Comment::now(new)?;
        tracing::debug!(%content, id = %comment.id, "adding top-level comment");
        Ok(self.persist(content, thread.with_root(comment)))
    }

    /// Replying to a comment that does not exist leaves the thread as-is
    pub fn add_reply(
        &mut self,
        content: &ContentId,
        thread: &Thread,
        parent: &CommentId,
        new: NewComment,
    ) -> Result<Mutation, Error> {
        let comment = Comment::now(new)?;
        let id = comment.id;
        match thread.with_reply(parent, comment) {
            Some(updated) => {
                tracing::debug!(%content, %parent, %id, "adding reply");
                Ok(self.persist(content, updated))
            }
            None => {
                tracing::debug!(%content, %parent, "reply target not found, ignoring reply");
                Ok(Mutation::unchanged(thread.clone()))
            }
        }
    }

    /// Liking a comment that does not exist leaves the thread as-is
    pub fn like(&mut self, content: &ContentId, thread: &Thread, id: &CommentId) -> Mutation {
        match thread.with_like(id) {
            Some(updated) => {
                tracing::debug!(%content, %id, "liking comment");
                self.persist(content, updated)
            }
            None => {
                tracing::debug!(%content, %id, "like target not found, ignoring like");
                Mutation::unchanged(thread.clone())
            }
        }
    }

    fn persist(&mut self, content: &ContentId, thread: Thread) -> Mutation {
        let key = self.key_for(content);
        let res = serde_json::to_string(&thread)
            .context("serializing comment thread")
            .and_then(|value| {
                self.storage
                    .set(&key, &value)
                    .with_context(|| format!("saving comment thread to {key:?}"))
            });
        let persist_error = match res {
            Ok(()) => None,
            Err(err) => {
                tracing::error!(%key, ?err, "failed saving comment thread");
                Some(err)
            }
        };
        Mutation {
            thread,
            changed: true,
            persist_error,
        }
    }
}

/// Reply chains have no depth limit, so neither does parsing them
fn parse_thread(raw: &str) -> serde_json::Result<Thread> {
    let mut de = serde_json::Deserializer::from_str(raw);
    de.disable_recursion_limit();
    let thread = Thread::deserialize(&mut de)?;
    de.end()?;
    Ok(thread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn post() -> ContentId {
        ContentId::from("post-1")
    }

    #[test]
    fn alice_and_bob() {
        let mut storage = MemoryStorage::new();
        let mut store = CommentStore::new(&mut storage);
        let thread = store.load(&post());
        assert!(thread.is_empty());

        let thread = store
            .add_top_level_comment(&post(), &thread, NewComment::new("Alice", "Great article"))
            .unwrap()
            .thread;
        let alice = thread.roots()[0].id;
        let thread = store
            .add_reply(&post(), &thread, &alice, NewComment::new("Bob", "Agreed"))
            .unwrap()
            .thread;
        let thread = store.like(&post(), &thread, &alice).thread;
        let thread = store.like(&post(), &thread, &alice).thread;

        assert_eq!(thread.len(), 1);
        let root = &thread.roots()[0];
        assert_eq!(root.author, "Alice");
        assert_eq!(root.content, "Great article");
        assert_eq!(root.likes, 2);
        assert_eq!(root.replies.len(), 1);
        assert_eq!(root.replies[0].author, "Bob");
        assert_eq!(root.replies[0].content, "Agreed");
        assert_eq!(root.replies[0].likes, 0);

        let reloaded = CommentStore::new(&mut storage).load(&post());
        assert_eq!(reloaded, thread);
    }

    #[test]
    fn every_mutation_is_written() {
        let mut storage = MemoryStorage::new();
        let mut store = CommentStore::new(&mut storage);
        let m = store
            .add_top_level_comment(&post(), &Thread::new(), NewComment::new("a", "b"))
            .unwrap();
        assert!(m.is_persisted());
        let id = m.thread.roots()[0].id;
        let m = store.like(&post(), &m.thread, &id);
        assert!(m.is_persisted());
        let m = store
            .add_reply(&post(), &m.thread, &id, NewComment::new("c", "d"))
            .unwrap();
        assert!(m.is_persisted());
        assert_eq!(store.storage().writes(), 3);
        assert_eq!(
            storage.get("comments-post-1"),
            Some(serde_json::to_string(&m.thread).unwrap())
        );
    }

    #[test]
    fn blank_input_is_rejected_without_writing() {
        let mut storage = MemoryStorage::new();
        let mut store = CommentStore::new(&mut storage);
        let thread = store
            .add_top_level_comment(&post(), &Thread::new(), NewComment::new("Alice", "hi"))
            .unwrap()
            .thread;
        let id = thread.roots()[0].id;

        assert_eq!(
            store
                .add_top_level_comment(&post(), &thread, NewComment::new("", "hello"))
                .unwrap_err(),
            Error::EmptyAuthor
        );
        assert_eq!(
            store
                .add_top_level_comment(&post(), &thread, NewComment::new("Alice", ""))
                .unwrap_err(),
            Error::EmptyContent
        );
        assert_eq!(
            store
                .add_reply(&post(), &thread, &id, NewComment::new("Bob", "  "))
                .unwrap_err(),
            Error::EmptyContent
        );
        assert_eq!(store.storage().writes(), 1);
        assert_eq!(store.load(&post()), thread);
    }

    #[test]
    fn missing_targets_are_ignored() {
        let mut storage = MemoryStorage::new();
        let mut store = CommentStore::new(&mut storage);
        let thread = store
            .add_top_level_comment(&post(), &Thread::new(), NewComment::new("Alice", "hi"))
            .unwrap()
            .thread;

        let m = store
            .add_reply(
                &post(),
                &thread,
                &CommentId::new(),
                NewComment::new("Bob", "hi"),
            )
            .unwrap();
        assert!(!m.changed);
        assert!(!m.is_persisted());
        assert_eq!(m.thread, thread);

        let m = store.like(&post(), &thread, &CommentId::new());
        assert!(!m.changed);
        assert_eq!(m.thread, thread);

        assert_eq!(store.storage().writes(), 1);
    }

    #[test]
    fn threads_are_keyed_by_content() {
        let mut storage = MemoryStorage::new();
        let mut store = CommentStore::new(&mut storage);
        let other = ContentId::from("post-2");
        let _ = store
            .add_top_level_comment(&post(), &Thread::new(), NewComment::new("a", "on one"))
            .unwrap();
        let _ = store
            .add_top_level_comment(&other, &Thread::new(), NewComment::new("b", "on two"))
            .unwrap();
        assert_eq!(store.load(&post()).roots()[0].content, "on one");
        assert_eq!(store.load(&other).roots()[0].content, "on two");
        assert!(store.load(&ContentId::from("post-3")).is_empty());
    }

    #[test]
    fn custom_prefix() {
        let mut storage = MemoryStorage::new();
        let mut store = CommentStore::with_config(
            &mut storage,
            StoreConfig::with_prefix(Some("erasure-blog/")),
        );
        assert_eq!(store.key_for(&post()), "erasure-blog/post-1");
        let _ = store
            .add_top_level_comment(&post(), &Thread::new(), NewComment::new("a", "b"))
            .unwrap();
        assert!(storage.get("erasure-blog/post-1").is_some());
        assert!(storage.get("comments-post-1").is_none());
    }

    #[test]
    fn unreadable_data_loads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set("comments-garbage", "{not json").unwrap();
        storage.set("comments-object", r#"{"id": 1}"#).unwrap();
        storage
            .set("comments-missing-fields", r#"[{"author": "x"}]"#)
            .unwrap();
        let store = CommentStore::new(&mut storage);
        assert!(store.load(&ContentId::from("garbage")).is_empty());
        assert!(store.load(&ContentId::from("object")).is_empty());
        assert!(store.load(&ContentId::from("missing-fields")).is_empty());
    }

    #[test]
    fn duplicate_ids_load_as_empty() {
        let c = Comment::now(NewComment::new("a", "b")).unwrap();
        let dup = Thread::new().with_root(c.clone()).with_root(c);
        let mut storage = MemoryStorage::new();
        storage
            .set("comments-post-1", &serde_json::to_string(&dup).unwrap())
            .unwrap();
        assert!(CommentStore::new(&mut storage).load(&post()).is_empty());
    }

    #[test]
    fn older_entries_without_likes_or_replies() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                "comments-post-1",
                r#"[{
                    "id": "6f1f0b36-2a07-4a35-9d5e-62b63fb1bb07",
                    "author": "Carol",
                    "date": "2024-03-01T10:00:00Z",
                    "content": "Does this cover SSDs?"
                }]"#,
            )
            .unwrap();
        let thread = CommentStore::new(&mut storage).load(&post());
        assert_eq!(thread.len(), 1);
        assert_eq!(thread.roots()[0].likes, 0);
        assert!(thread.roots()[0].replies.is_empty());
        assert_eq!(thread.roots()[0].email, None);
    }

    #[test]
    fn deep_reply_chains_survive_a_reload() {
        let mut storage = MemoryStorage::new();
        let mut store = CommentStore::new(&mut storage);
        let mut thread = store
            .add_top_level_comment(&post(), &Thread::new(), NewComment::new("Alice", "root"))
            .unwrap()
            .thread;
        let mut parent = thread.roots()[0].id;
        for depth in 1..=120 {
            thread = store
                .add_reply(&post(), &thread, &parent, NewComment::new("Bob", "deeper"))
                .unwrap()
                .thread;
            parent = thread.find(&parent).unwrap().replies[0].id;
            if depth % 40 == 0 {
                assert_eq!(store.load(&post()), thread, "reload broke at depth {depth}");
            }
        }
        assert_eq!(thread.total(), 121);

        let reloaded = CommentStore::new(&mut storage).load(&post());
        assert_eq!(reloaded.total(), 121);
        assert_eq!(reloaded, thread);

        let mut store = CommentStore::new(&mut storage);
        let liked = store.like(&post(), &reloaded, &parent).thread;
        assert_eq!(store.load(&post()).find(&parent).unwrap().likes, 1);
        assert_eq!(liked.total(), 121);
    }

    #[test]
    fn trailing_garbage_loads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set("comments-post-1", "[] []").unwrap();
        assert!(CommentStore::new(&mut storage).load(&post()).is_empty());
    }

    #[test]
    fn failed_writes_still_return_the_thread() {
        let mut storage = MemoryStorage::with_quota(0);
        let mut store = CommentStore::new(&mut storage);
        let m = store
            .add_top_level_comment(&post(), &Thread::new(), NewComment::new("Alice", "hi"))
            .unwrap();
        assert!(m.changed);
        assert!(m.persist_error.is_some());
        assert!(!m.is_persisted());
        assert_eq!(m.thread.len(), 1);
        assert!(store.load(&post()).is_empty());
    }
}
