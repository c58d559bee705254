use std::collections::HashSet;

use crate::api::{Comment, CommentId};

/// All the comments attached to one piece of content
///
/// Roots are ordered newest first, replies oldest first. A `Thread` is a
/// persistent value: every `with_*` method leaves `self` untouched and returns
/// an updated copy that shares the unchanged subtrees with the original.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Thread {
    roots: im::Vector<Comment>,
}

impl Thread {
    pub fn new() -> Thread {
        Thread {
            roots: im::Vector::new(),
        }
    }

    pub fn roots(&self) -> &im::Vector<Comment> {
        &self.roots
    }

    pub fn iter(&self) -> im::vector::Iter<'_, Comment> {
        self.roots.iter()
    }

    /// Number of root comments
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of comments at any depth
    pub fn total(&self) -> usize {
        self.roots.iter().map(|c| c.total()).sum()
    }

    pub fn find(&self, id: &CommentId) -> Option<&Comment> {
        find_in(&self.roots, id)
    }

    /// Depth-first, parents before their replies
    pub fn walk(&self) -> Vec<&Comment> {
        fn walk_into<'a>(comments: &'a im::Vector<Comment>, res: &mut Vec<&'a Comment>) {
            for c in comments {
                res.push(c);
                walk_into(&c.replies, res);
            }
        }
        let mut res = Vec::with_capacity(self.total());
        walk_into(&self.roots, &mut res);
        res
    }

    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::new();
        self.walk().into_iter().all(|c| seen.insert(c.id))
    }

    pub fn with_root(&self, comment: Comment) -> Thread {
        let mut roots = self.roots.clone();
        roots.push_front(comment);
        Thread { roots }
    }

    /// Returns `None` if `parent` is nowhere in the thread
    pub fn with_reply(&self, parent: &CommentId, reply: Comment) -> Option<Thread> {
        let path = path_to(&self.roots, parent)?;
        Some(Thread {
            roots: rebuild(&self.roots, &path, |p| p.replies.push_back(reply)),
        })
    }

    /// Returns `None` if `id` is nowhere in the thread
    pub fn with_like(&self, id: &CommentId) -> Option<Thread> {
        let path = path_to(&self.roots, id)?;
        Some(Thread {
            roots: rebuild(&self.roots, &path, |c| c.likes = c.likes.saturating_add(1)),
        })
    }
}

impl<'a> IntoIterator for &'a Thread {
    type Item = &'a Comment;
    type IntoIter = im::vector::Iter<'a, Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

fn find_in<'a>(comments: &'a im::Vector<Comment>, id: &CommentId) -> Option<&'a Comment> {
    for c in comments {
        if c.id == *id {
            return Some(c);
        }
        if let Some(res) = find_in(&c.replies, id) {
            return Some(res);
        }
    }
    None
}

/// Indices to follow from `comments` down to the comment `id`
fn path_to(comments: &im::Vector<Comment>, id: &CommentId) -> Option<Vec<usize>> {
    for (i, c) in comments.iter().enumerate() {
        if c.id == *id {
            return Some(vec![i]);
        }
        if let Some(mut path) = path_to(&c.replies, id) {
            path.insert(0, i);
            return Some(path);
        }
    }
    None
}

/// Copies every comment along `path`, applying `f` to the last one
fn rebuild<F>(comments: &im::Vector<Comment>, path: &[usize], f: F) -> im::Vector<Comment>
where
    F: FnOnce(&mut Comment),
{
    let mut res = comments.clone();
    let (&idx, rest) = match path.split_first() {
        Some(p) => p,
        None => return res,
    };
    let mut c = res[idx].clone();
    match rest.is_empty() {
        true => f(&mut c),
        false => c.replies = rebuild(&c.replies, rest, f),
    }
    res[idx] = c;
    res
}
