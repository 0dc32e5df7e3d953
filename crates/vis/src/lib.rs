//! [airprobe]'s visualization library.
//!
//! [airprobe]: https://github.com/nelusnegur/airprobe
//!
//! Turns a [`Dataset`] of sensor readings into one chart series per metric
//! and renders them as an HTML dashboard driven by Plotly.
//!
//! **WARNING**: This library is airprobe's visualization internal library and
//! there are no plans to stabilize it. The API may break at any time without notice.
//!
//! [`Dataset`]: airprobe_readings::Dataset

#![warn(missing_docs)]

pub(crate) mod id;
pub(crate) mod template;

pub mod chart;
pub mod color;
pub mod dashboard;
pub mod error;
pub mod layout;
pub mod render;
pub mod series;
