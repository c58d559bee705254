use std::fmt;

use chrono::Utc;
use uuid::Uuid;

use crate::{Error, Time, STUB_UUID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn new() -> CommentId {
        CommentId(Uuid::new_v4())
    }

    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,

    /// Display name, never empty
    pub author: String,

    /// Stored along with the comment but never displayed nor logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Creation time, immutable
    pub date: Time,

    pub content: String,

    #[serde(default)]
    pub likes: u64,

    /// Child comments, oldest first
    #[serde(default)]
    pub replies: im::Vector<Comment>,
}

impl Comment {
    /// Builds a fresh comment, with a new id and the current time
    pub fn now(new: NewComment) -> Result<Comment, Error> {
        Comment::new(CommentId::new(), Utc::now(), new)
    }

    pub fn new(id: CommentId, date: Time, new: NewComment) -> Result<Comment, Error> {
        let NewComment {
            author,
            content,
            email,
        } = new.normalized()?;
        Ok(Comment {
            id,
            author,
            email,
            date,
            content,
            likes: 0,
            replies: im::Vector::new(),
        })
    }

    /// Number of comments in this subtree, including self
    pub fn total(&self) -> usize {
        1 + self.replies.iter().map(|c| c.total()).sum::<usize>()
    }
}

// Hand-written so that the email never ends up in logs
impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comment")
            .field("id", &self.id)
            .field("author", &self.author)
            .field("email", &self.email.as_ref().map(|_| "<redacted>"))
            .field("date", &self.date)
            .field("content", &self.content)
            .field("likes", &self.likes)
            .field("replies", &self.replies)
            .finish()
    }
}

/// What a visitor typed into a comment form
#[derive(Clone, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewComment {
    pub author: String,
    pub content: String,
    pub email: Option<String>,
}

impl NewComment {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> NewComment {
        NewComment {
            author: author.into(),
            content: content.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> NewComment {
        self.email = Some(email.into());
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.author.trim().is_empty() {
            return Err(Error::EmptyAuthor);
        }
        if self.content.trim().is_empty() {
            return Err(Error::EmptyContent);
        }
        crate::validate_string(&self.author)?;
        crate::validate_string(&self.content)?;
        if let Some(email) = &self.email {
            crate::validate_string(email)?;
        }
        Ok(())
    }

    /// Validates, then trims every field and drops a blank email
    pub fn normalized(self) -> Result<NewComment, Error> {
        self.validate()?;
        Ok(NewComment {
            author: String::from(self.author.trim()),
            content: String::from(self.content.trim()),
            email: self
                .email
                .map(|e| String::from(e.trim()))
                .filter(|e| !e.is_empty()),
        })
    }
}

impl fmt::Debug for NewComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewComment")
            .field("author", &self.author)
            .field("content", &self.content)
            .field("email", &self.email.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> Time {
        chrono::TimeZone::timestamp_opt(&Utc, secs, 0).unwrap()
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(
            NewComment::new("", "hello").validate(),
            Err(Error::EmptyAuthor)
        );
        assert_eq!(
            NewComment::new("   \t", "hello").validate(),
            Err(Error::EmptyAuthor)
        );
        assert_eq!(
            NewComment::new("Alice", "").validate(),
            Err(Error::EmptyContent)
        );
        assert_eq!(
            NewComment::new("Alice", "\n \n").validate(),
            Err(Error::EmptyContent)
        );
        assert_eq!(NewComment::new("Alice", "hello").validate(), Ok(()));
    }

    #[test]
    fn new_comment_is_trimmed() {
        let c = Comment::new(
            CommentId::stub(),
            at(0),
            NewComment::new("  Alice ", " Great article\n").with_email("   "),
        )
        .unwrap();
        assert_eq!(c.author, "Alice");
        assert_eq!(c.content, "Great article");
        assert_eq!(c.email, None);
        assert_eq!(c.likes, 0);
        assert!(c.replies.is_empty());
    }

    #[test]
    fn email_is_never_debug_printed() {
        let c = Comment::new(
            CommentId::stub(),
            at(0),
            NewComment::new("Alice", "hi").with_email("alice@example.org"),
        )
        .unwrap();
        assert_eq!(c.email.as_deref(), Some("alice@example.org"));
        assert!(!format!("{c:?}").contains("alice@example.org"));
        let n = NewComment::new("Alice", "hi").with_email("alice@example.org");
        assert!(!format!("{n:?}").contains("alice@example.org"));
    }

    #[test]
    fn json_format() {
        let mut c = Comment::new(
            CommentId::stub(),
            at(1_700_000_000),
            NewComment::new("Alice", "Great article"),
        )
        .unwrap();
        c.replies.push_back(
            Comment::new(
                CommentId(Uuid::nil()),
                at(1_700_000_060),
                NewComment::new("Bob", "Agreed").with_email("bob@example.org"),
            )
            .unwrap(),
        );
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "ffffffff-ffff-ffff-ffff-ffffffffffff",
                "author": "Alice",
                "date": "2023-11-14T22:13:20Z",
                "content": "Great article",
                "likes": 0,
                "replies": [{
                    "id": "00000000-0000-0000-0000-000000000000",
                    "author": "Bob",
                    "email": "bob@example.org",
                    "date": "2023-11-14T22:14:20Z",
                    "content": "Agreed",
                    "likes": 0,
                    "replies": [],
                }],
            })
        );
        let back: Comment = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn total_counts_nested_replies() {
        let leaf = || {
            Comment::new(CommentId::new(), at(0), NewComment::new("a", "b")).unwrap()
        };
        let mut mid = leaf();
        mid.replies.push_back(leaf());
        mid.replies.push_back(leaf());
        let mut root = leaf();
        root.replies.push_back(mid);
        assert_eq!(root.total(), 4);
    }
}
