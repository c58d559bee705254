#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Author name is required")]
    EmptyAuthor,

    #[error("Comment text is required")]
    EmptyContent,

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),
}

impl Error {
    /// Short message suitable for inline display next to a form
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::EmptyAuthor => "Please enter your name.",
            Error::EmptyContent => "Please write a comment before posting.",
            Error::NullByteInString(_) => "Your comment contains unsupported characters.",
        }
    }
}
