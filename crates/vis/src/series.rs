//! Builds chart series from a dataset.
//!
//! A [`Series`] holds one metric's readings across a [`Dataset`], in dataset
//! order and with one value per record. Readings that could not be parsed
//! are kept as `None` so the renderer can draw them as gaps; no record is
//! ever dropped. All series built from the same dataset share one label
//! sequence, `Entry 1` through `Entry N`.

use std::sync::Arc;

use airprobe_readings::Dataset;
use airprobe_readings::MetricKey;
use airprobe_readings::Reading;

use crate::color::Color;
use crate::color::FillColor;

const LABEL_PREFIX: &str = "Entry";

/// One metric's readings, ready to be charted.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    label: String,
    metric: MetricKey,
    values: Vec<Reading>,
    border_color: Color,
    fill_color: FillColor,
    labels: Arc<[String]>,
}

impl Series {
    /// The legend label, e.g. `Temperature (°C)`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The metric the series is built from.
    pub fn metric(&self) -> MetricKey {
        self.metric
    }

    /// The readings, aligned with the dataset order.
    pub fn values(&self) -> &[Reading] {
        &self.values
    }

    /// The line color.
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// The color of the area under the line.
    pub fn fill_color(&self) -> FillColor {
        self.fill_color
    }

    /// The x axis labels shared by all series of the dataset.
    pub fn labels(&self) -> &Arc<[String]> {
        &self.labels
    }
}

/// Builds the series of a single dataset.
///
/// The label sequence is computed once and shared by every series the
/// builder produces.
pub struct SeriesBuilder<'a> {
    dataset: &'a Dataset,
    labels: Arc<[String]>,
}

impl<'a> SeriesBuilder<'a> {
    /// Creates a builder for `dataset`.
    pub fn new(dataset: &'a Dataset) -> SeriesBuilder<'a> {
        Self {
            dataset,
            labels: Arc::from(build_labels(dataset)),
        }
    }

    /// The ordinal labels of the dataset's records.
    pub fn labels(&self) -> &Arc<[String]> {
        &self.labels
    }

    /// Builds the series of `metric` drawn in `color`.
    pub fn series(&self, metric: MetricKey, color: Color) -> Series {
        let values = self
            .dataset
            .iter()
            .map(|record| record.get(metric))
            .collect::<Vec<Reading>>();

        Series {
            label: metric.title(),
            metric,
            values,
            border_color: color,
            fill_color: color.fill(),
            labels: Arc::clone(&self.labels),
        }
    }
}

/// Builds the series of `metric` across `dataset` drawn in `color`.
pub fn build_series(dataset: &Dataset, metric: MetricKey, color: Color) -> Series {
    SeriesBuilder::new(dataset).series(metric, color)
}

/// Returns `["Entry 1", ..., "Entry N"]` for a dataset of N records.
pub fn build_labels(dataset: &Dataset) -> Vec<String> {
    (1..=dataset.len())
        .map(|position| format!("{LABEL_PREFIX} {position}"))
        .collect()
}
