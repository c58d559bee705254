use crate::api::CommentId;

/// Which comment, if any, currently has its reply form open
///
/// At most one form is open at a time. This is view state and is never saved.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReplyBox(Option<CommentId>);

impl ReplyBox {
    pub fn closed() -> ReplyBox {
        ReplyBox(None)
    }

    pub fn target(&self) -> Option<CommentId> {
        self.0
    }

    pub fn is_open_for(&self, id: &CommentId) -> bool {
        self.0.as_ref() == Some(id)
    }

    /// Opens the form under `id`, closing any other one, or closes it if it was already open there
    pub fn toggle(&mut self, id: CommentId) {
        self.0 = match self.0 {
            Some(current) if current == id => None,
            _ => Some(id),
        };
    }

    pub fn close(&mut self) {
        self.0 = None;
    }
}
