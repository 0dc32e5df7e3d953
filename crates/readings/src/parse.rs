use std::io::Read;

use csv::ReaderBuilder;
use csv::StringRecord;
use csv::Trim;
use tracing::debug;
use tracing::warn;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::metric::MetricKey;
use crate::record::Reading;
use crate::record::Record;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Whether the first row of the CSV text names the columns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// Columns are located by their canonical metric name.
    #[default]
    Present,

    /// Columns are positional, in [`MetricKey::ALL`] order.
    Absent,
}

/// Parses CSV text into a [`Dataset`].
///
/// Cells that cannot be read as a finite number become `None` readings;
/// no row is dropped because of a malformed cell.
pub fn parse(text: &str, header: HeaderMode) -> Result<Dataset> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    parse_reader(text.as_bytes(), header)
}

/// Parses CSV data from a reader into a [`Dataset`].
pub fn parse_reader<R: Read>(reader: R, header: HeaderMode) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(header == HeaderMode::Present)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = match header {
        HeaderMode::Present => ColumnMap::from_header(reader.headers()?),
        HeaderMode::Absent => ColumnMap::positional(),
    };

    let mut records = Vec::new();
    let mut row = StringRecord::new();

    while reader.read_record(&mut row)? {
        records.push(columns.record(&row));
    }

    debug!(records = records.len(), "parsed sensor readings");

    Ok(Dataset::new(records))
}

/// Maps each metric to the index of the column that holds it.
#[derive(Debug, PartialEq)]
struct ColumnMap {
    indices: [Option<usize>; MetricKey::ALL.len()],
}

impl ColumnMap {
    fn positional() -> ColumnMap {
        let mut indices = [None; MetricKey::ALL.len()];

        for metric in MetricKey::ALL {
            indices[metric.position()] = Some(metric.position());
        }

        Self { indices }
    }

    fn from_header(header: &StringRecord) -> ColumnMap {
        let mut indices = [None; MetricKey::ALL.len()];

        for metric in MetricKey::ALL {
            let index = header.iter().position(|column| column == metric.name());

            if index.is_none() {
                warn!(
                    column = metric.name(),
                    "the CSV header has no column for the metric; its readings will be empty"
                );
            }

            indices[metric.position()] = index;
        }

        Self { indices }
    }

    fn record(&self, row: &StringRecord) -> Record {
        let mut record = Record::default();

        for metric in MetricKey::ALL {
            let reading = self.indices[metric.position()]
                .and_then(|index| row.get(index))
                .and_then(coerce);

            record.set(metric, reading);
        }

        record
    }
}

fn coerce(cell: &str) -> Reading {
    let cell = cell.trim();

    if cell.is_empty() {
        return None;
    }

    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}
