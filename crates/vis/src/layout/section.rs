//! Page sections.

use crate::id::Id;
use crate::layout::Element;
use crate::layout::ElementKind;

/// A row of elements.
#[derive(Debug)]
pub struct Section {
    id: Id,
    /// The elements in display order.
    pub elements: Vec<ElementKind>,
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Section {
        Self {
            id: Id::next(),
            elements: Vec::new(),
        }
    }

    /// Appends an element to the section.
    pub fn add(mut self, element: impl Into<ElementKind>) -> Section {
        self.elements.push(element.into());
        self
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Section {
    fn id(&self) -> Id {
        self.id
    }
}
