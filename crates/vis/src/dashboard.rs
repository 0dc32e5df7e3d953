//! The environmental data dashboard.
//!
//! A [`Dashboard`] lays out one chart per metric in rows of panels and
//! renders whatever the current [`LoadState`] is: a loading placeholder
//! before the first dataset arrives, the charts once a dataset is installed
//! (even an empty one), or an error message when the latest load failed.

use std::collections::HashSet;

use airprobe_readings::Dataset;
use airprobe_readings::MetricKey;
use airprobe_readings::slot::LoadState;
use tracing::debug;

use crate::color::Color;
use crate::error::Result;
use crate::error::VisError;
use crate::layout::Chart;
use crate::layout::Section;
use crate::layout::Text;
use crate::layout::View;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;
use crate::series::SeriesBuilder;

const DEFAULT_TITLE: &str = "Environmental Data Dashboard";
const LOADING_MESSAGE: &str = "Loading...";

/// A metric charted in a given color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    /// The charted metric.
    pub metric: MetricKey,
    /// The line color; the fill is derived from it.
    pub color: Color,
}

impl Panel {
    /// Creates a panel charting `metric` in `color`.
    pub const fn new(metric: MetricKey, color: Color) -> Panel {
        Self { metric, color }
    }
}

/// The page title and the rows of panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    title: String,
    rows: Vec<Vec<Panel>>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            title: String::from(DEFAULT_TITLE),
            rows: vec![
                vec![
                    Panel::new(MetricKey::Temperature, Color::rgb(255, 99, 132)),
                    Panel::new(MetricKey::Humidity, Color::rgb(54, 162, 235)),
                    Panel::new(MetricKey::Pm2_5, Color::rgb(75, 192, 192)),
                ],
                vec![
                    Panel::new(MetricKey::Co, Color::rgb(255, 206, 86)),
                    Panel::new(MetricKey::Nh3, Color::rgb(153, 102, 255)),
                ],
            ],
        }
    }
}

impl Dashboard {
    /// Creates a dashboard; every metric may appear in at most one panel.
    pub fn new(title: impl Into<String>, rows: Vec<Vec<Panel>>) -> Result<Dashboard> {
        let mut seen = HashSet::new();

        for panel in rows.iter().flatten() {
            if !seen.insert(panel.metric) {
                return Err(VisError::DuplicatePanel(panel.metric));
            }
        }

        Ok(Self {
            title: title.into(),
            rows,
        })
    }

    /// Replaces the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Dashboard {
        self.title = title.into();
        self
    }

    /// Draws `metric` in `color`. Metrics without a panel are left out.
    pub fn with_color(mut self, metric: MetricKey, color: Color) -> Dashboard {
        for panel in self.rows.iter_mut().flatten() {
            if panel.metric == metric {
                panel.color = color;
            }
        }

        self
    }

    /// The page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The panels in display order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.rows.iter().flatten()
    }

    /// Lays out one chart per panel for `dataset`.
    pub fn view(&self, dataset: &Dataset) -> View {
        let builder = SeriesBuilder::new(dataset);
        let mut view = View::new(&self.title);

        for row in &self.rows {
            let section = row.iter().fold(Section::new(), |section, panel| {
                let series = builder.series(panel.metric, panel.color);
                section.add(Chart::line(&series))
            });

            view = view.add(section);
        }

        debug!(records = dataset.len(), "laid out the dashboard charts");

        view
    }

    /// Renders the page for the current load state.
    pub fn render_state<O>(
        &self,
        state: &LoadState,
        output: &mut O,
    ) -> std::result::Result<(), RenderError>
    where
        O: OutputStream,
    {
        let view = match state {
            LoadState::Idle => View::new(&self.title).add(Text::new(LOADING_MESSAGE)),
            LoadState::Loaded {
                location,
                dataset,
                loaded_at,
            } => self.view(dataset).caption(format!(
                "Source: {location} | {entries} entries | loaded at {loaded_at}",
                entries = dataset.len(),
                loaded_at = loaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
            )),
            LoadState::Failed {
                location,
                message,
                failed_at,
            } => View::new(&self.title)
                .caption(format!(
                    "Source: {location} | failed at {failed_at}",
                    failed_at = failed_at.format("%Y-%m-%d %H:%M:%S UTC"),
                ))
                .add(Text::new(format!("Could not load the data: {message}"))),
        };

        view.render(output)
    }
}
