//! The page element.

use crate::layout::ElementKind;

/// A page.
#[derive(Debug)]
pub struct View {
    /// The page title, also shown as the main heading.
    pub title: String,
    /// An optional line shown under the heading, such as the data source.
    pub caption: Option<String>,
    /// The elements in display order.
    pub elements: Vec<ElementKind>,
}

impl View {
    /// Creates an empty page titled `title`.
    pub fn new(title: impl Into<String>) -> View {
        View {
            title: title.into(),
            caption: None,
            elements: Vec::new(),
        }
    }

    /// Sets the line shown under the heading.
    pub fn caption(mut self, caption: impl Into<String>) -> View {
        self.caption = Some(caption.into());
        self
    }

    /// Appends an element to the page.
    pub fn add(mut self, element: impl Into<ElementKind>) -> View {
        self.elements.push(element.into());
        self
    }

    /// Whether any element of the page, at any depth, is a chart.
    pub fn has_charts(&self) -> bool {
        fn contains_chart(elements: &[ElementKind]) -> bool {
            elements.iter().any(|element| match element {
                ElementKind::Chart(_) => true,
                ElementKind::Section(section) => contains_chart(&section.elements),
                ElementKind::Text(_) => false,
            })
        }

        contains_chart(&self.elements)
    }
}
