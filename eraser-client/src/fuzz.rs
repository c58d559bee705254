#![cfg(test)]

use std::collections::HashMap;

use bolero::generator::TypeGenerator;

use crate::{
    api::{CommentId, ContentId, NewComment},
    CommentStore, MemoryStorage,
};

#[derive(Clone, Debug, TypeGenerator)]
enum Op {
    Comment {
        #[generator(bolero::generator::gen_with::<String>().len(0..10usize))]
        author: String,
        #[generator(bolero::generator::gen_with::<String>().len(0..10usize))]
        text: String,
    },
    Reply {
        parent: usize,
        #[generator(bolero::generator::gen_with::<String>().len(0..10usize))]
        author: String,
        #[generator(bolero::generator::gen_with::<String>().len(0..10usize))]
        text: String,
    },
    ReplyToMissing,
    Like {
        target: usize,
    },
    LikeMissing,
}

/// What the thread should look like, tracked independently of `Thread`
#[derive(Default)]
struct Expected {
    created: Vec<CommentId>,
    roots: Vec<CommentId>,
    replies: HashMap<CommentId, Vec<CommentId>>,
    likes: HashMap<CommentId, u64>,
}

fn run_ops(ops: Vec<Op>) {
    let content = ContentId::from("fuzzed-post");
    let mut storage = MemoryStorage::new();
    let mut store = CommentStore::new(&mut storage);
    let mut thread = store.load(&content);
    let mut expected = Expected::default();

    for op in ops {
        let writes_before = store.storage().writes();
        match op {
            Op::Comment { author, text } => {
                let new = NewComment::new(author, text);
                let valid = new.validate().is_ok();
                match store.add_top_level_comment(&content, &thread, new) {
                    Ok(m) => {
                        assert!(valid);
                        assert!(m.is_persisted());
                        let id = m.thread.roots()[0].id;
                        expected.roots.insert(0, id);
                        expected.created.push(id);
                        thread = m.thread;
                    }
                    Err(_) => {
                        assert!(!valid);
                        assert_eq!(store.storage().writes(), writes_before);
                    }
                }
            }
            Op::Reply {
                parent,
                author,
                text,
            } => {
                if expected.created.is_empty() {
                    continue;
                }
                let parent = expected.created[parent % expected.created.len()];
                let new = NewComment::new(author, text);
                let valid = new.validate().is_ok();
                match store.add_reply(&content, &thread, &parent, new) {
                    Ok(m) => {
                        assert!(valid);
                        assert!(m.is_persisted());
                        let id = m
                            .thread
                            .find(&parent)
                            .and_then(|p| p.replies.last())
                            .expect("reply was not appended to its parent")
                            .id;
                        expected.replies.entry(parent).or_default().push(id);
                        expected.created.push(id);
                        thread = m.thread;
                    }
                    Err(_) => {
                        assert!(!valid);
                        assert_eq!(store.storage().writes(), writes_before);
                    }
                }
            }
            Op::ReplyToMissing => {
                let m = store
                    .add_reply(
                        &content,
                        &thread,
                        &CommentId::new(),
                        NewComment::new("Bob", "hi"),
                    )
                    .expect("valid reply was rejected");
                assert!(!m.changed);
                assert_eq!(m.thread, thread);
                assert_eq!(store.storage().writes(), writes_before);
            }
            Op::Like { target } => {
                if expected.created.is_empty() {
                    continue;
                }
                let id = expected.created[target % expected.created.len()];
                let m = store.like(&content, &thread, &id);
                assert!(m.is_persisted());
                *expected.likes.entry(id).or_default() += 1;
                thread = m.thread;
            }
            Op::LikeMissing => {
                let m = store.like(&content, &thread, &CommentId::new());
                assert!(!m.changed);
                assert_eq!(m.thread, thread);
                assert_eq!(store.storage().writes(), writes_before);
            }
        }
        assert!(thread.has_unique_ids());
        assert_eq!(thread.total(), expected.created.len());
    }

    let roots = thread.iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(roots, expected.roots);
    for c in thread.walk() {
        let replies = c.replies.iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(
            replies,
            expected.replies.get(&c.id).cloned().unwrap_or_default()
        );
        assert_eq!(c.likes, expected.likes.get(&c.id).copied().unwrap_or(0));
    }

    drop(store);
    assert_eq!(CommentStore::new(&mut storage).load(&content), thread);
}

#[test]
fn random_operation_sequences() {
    bolero::check!()
        .with_type::<Vec<Op>>()
        .cloned()
        .for_each(run_ops)
}
