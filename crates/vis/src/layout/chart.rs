//! Chart elements.

use crate::chart::ChartSpec;
use crate::id::Id;
use crate::layout::Element;
use crate::series::Series;

/// A chart with a heading.
#[derive(Debug)]
pub struct Chart {
    id: Id,
    /// The heading shown above the chart.
    pub heading: String,
    /// What the chart draws.
    pub spec: ChartSpec,
}

impl Chart {
    /// Creates a chart drawing `spec` under `heading`.
    pub fn new(heading: String, spec: ChartSpec) -> Chart {
        Self {
            id: Id::next(),
            heading,
            spec,
        }
    }

    /// Creates a line chart of `series`, headed by the series label.
    pub fn line(series: &Series) -> Chart {
        Chart::new(series.label().to_owned(), ChartSpec::line(series))
    }
}

impl Element for Chart {
    fn id(&self) -> Id {
        self.id
    }
}
