//! Environmental sensor readings.
//!
//! This crate defines the strict data model for a CSV file of sensor
//! readings ([`Record`], [`Dataset`], [`MetricKey`]), the adapter that
//! coerces raw CSV text into it ([`parse`]), and the [`slot::DatasetSlot`]
//! that holds the most recently loaded dataset.

mod dataset;
mod metric;
mod parse;
mod record;

pub mod error;
pub mod slot;

pub use crate::dataset::Dataset;
pub use crate::metric::MetricKey;
pub use crate::parse::HeaderMode;
pub use crate::parse::parse;
pub use crate::parse::parse_reader;
pub use crate::record::Reading;
pub use crate::record::Record;
pub use crate::slot::SourceLocation;
