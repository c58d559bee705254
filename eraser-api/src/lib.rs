use chrono::Utc;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

mod comment;
pub use comment::{Comment, CommentId, NewComment};

mod content;
pub use content::ContentId;

mod error;
pub use error::Error;

/// Rejects strings that could not be round-tripped through every storage backend
pub fn validate_string(s: &str) -> Result<(), Error> {
    match s.contains('\0') {
        true => Err(Error::NullByteInString(String::from(s))),
        false => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_bytes_are_rejected() {
        assert_eq!(validate_string("hello"), Ok(()));
        assert_eq!(
            validate_string("hel\0lo"),
            Err(Error::NullByteInString(String::from("hel\0lo")))
        );
    }
}
