//! Text paragraphs.

use crate::id::Id;
use crate::layout::Element;

/// A paragraph of plain text.
#[derive(Debug)]
pub struct Text {
    id: Id,
    /// The text; it is escaped when rendered.
    pub content: String,
}

impl Text {
    /// Creates a paragraph holding `content`.
    pub fn new(content: impl Into<String>) -> Text {
        Self {
            id: Id::next(),
            content: content.into(),
        }
    }
}

impl Element for Text {
    fn id(&self) -> Id {
        self.id
    }
}
