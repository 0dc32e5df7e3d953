//! Plotly chart specifications.
//!
//! A [`ChartSpec`] serializes into the `data` and `layout` arguments of
//! `Plotly.newPlot`. Missing readings serialize as `null` and, with
//! `connectgaps` disabled, are drawn as gaps in the line.

use std::sync::Arc;

use airprobe_readings::Reading;
use serde::Serialize;

use crate::color::Color;
use crate::color::FillColor;
use crate::series::Series;

/// The traces and layout of a single chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// The lines drawn in the chart.
    pub data: Vec<Trace>,
    /// The axes and presentation settings.
    pub layout: Layout,
}

impl ChartSpec {
    /// Creates a line chart with a single series.
    pub fn line(series: &Series) -> ChartSpec {
        Self {
            data: vec![Trace::from(series)],
            layout: Layout::new(),
        }
    }
}

/// A filled line.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Trace {
    #[serde(rename = "type")]
    kind: TraceKind,
    mode: Mode,
    fill: Fill,
    name: String,
    x: Arc<[String]>,
    y: Vec<Reading>,
    line: Line,
    #[serde(rename = "fillcolor")]
    fill_color: FillColor,
    #[serde(rename = "connectgaps")]
    connect_gaps: bool,
}

impl From<&Series> for Trace {
    fn from(series: &Series) -> Self {
        Self {
            kind: TraceKind::Scatter,
            mode: Mode::Lines,
            fill: Fill::Tozeroy,
            name: series.label().to_owned(),
            x: Arc::clone(series.labels()),
            y: series.values().to_vec(),
            line: Line {
                color: series.border_color(),
            },
            fill_color: series.fill_color(),
            connect_gaps: false,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Line {
    color: Color,
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
enum TraceKind {
    #[default]
    Scatter,
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Mode {
    #[default]
    Lines,
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Fill {
    #[default]
    Tozeroy,
}

/// The presentation settings of a chart.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Layout {
    #[serde(rename = "xaxis")]
    x_axis: Axis,
    #[serde(rename = "yaxis")]
    y_axis: Axis,
    height: u32,
    #[serde(rename = "showlegend")]
    show_legend: bool,
    #[serde(rename = "autosize")]
    auto_size: bool,
    #[serde(rename = "hovermode")]
    hover_mode: HoverMode,
}

impl Layout {
    /// Creates the layout shared by the dashboard charts.
    pub fn new() -> Self {
        Self {
            x_axis: Axis::new(AxisKind::Category),
            y_axis: Axis::new(AxisKind::Linear),
            height: 360,
            show_legend: true,
            auto_size: true,
            hover_mode: HoverMode::XUnified,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Axis {
    #[serde(rename = "type")]
    kind: AxisKind,
    #[serde(rename = "showgrid")]
    show_grid: bool,
    #[serde(rename = "zeroline")]
    zero_line: bool,
    #[serde(rename = "autorange")]
    auto_range: bool,
    #[serde(rename = "automargin")]
    auto_margin: bool,
}

impl Axis {
    fn new(kind: AxisKind) -> Self {
        Self {
            kind,
            show_grid: true,
            zero_line: false,
            auto_range: true,
            auto_margin: true,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
enum AxisKind {
    Linear,
    Category,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
enum HoverMode {
    #[serde(rename = "x unified")]
    XUnified,
}
