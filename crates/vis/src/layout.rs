//! Describes the structure of a page.
//!
//! A [`View`] is the page itself. It holds [`Section`]s, which lay out their
//! elements in a row, [`Chart`]s and [`Text`] paragraphs. The layout only
//! describes what is shown; the [`render`](crate::render) module decides how.

pub mod chart;
pub mod section;
pub mod text;
pub mod view;

pub use crate::layout::chart::Chart;
pub use crate::layout::section::Section;
pub use crate::layout::text::Text;
pub use crate::layout::view::View;

use crate::id::Id;

/// An element of a page.
pub trait Element {
    /// The identifier of the element, unique within the process.
    fn id(&self) -> Id;
}

/// The elements a page can hold.
#[derive(Debug)]
pub enum ElementKind {
    /// A row of elements.
    Section(Section),
    /// A chart.
    Chart(Chart),
    /// A paragraph of text.
    Text(Text),
}

impl Element for ElementKind {
    fn id(&self) -> Id {
        match self {
            ElementKind::Section(s) => s.id(),
            ElementKind::Chart(c) => c.id(),
            ElementKind::Text(t) => t.id(),
        }
    }
}

impl From<Section> for ElementKind {
    fn from(section: Section) -> Self {
        ElementKind::Section(section)
    }
}

impl From<Chart> for ElementKind {
    fn from(chart: Chart) -> Self {
        ElementKind::Chart(chart)
    }
}

impl From<Text> for ElementKind {
    fn from(text: Text) -> Self {
        ElementKind::Text(text)
    }
}
