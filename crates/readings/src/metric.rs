use std::fmt::Display;
use std::str::FromStr;

use crate::error::ReadingsError;

/// One of the five tracked measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricKey {
    Pm2_5,
    Co,
    Nh3,
    Temperature,
    Humidity,
}

impl MetricKey {
    /// All metrics in canonical column order.
    pub const ALL: [MetricKey; 5] = [
        MetricKey::Pm2_5,
        MetricKey::Co,
        MetricKey::Nh3,
        MetricKey::Temperature,
        MetricKey::Humidity,
    ];

    /// The column name used in the CSV header.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKey::Pm2_5 => "pm2_5",
            MetricKey::Co => "co",
            MetricKey::Nh3 => "nh3",
            MetricKey::Temperature => "temperature",
            MetricKey::Humidity => "humidity",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MetricKey::Pm2_5 => "PM2.5",
            MetricKey::Co => "CO",
            MetricKey::Nh3 => "NH3",
            MetricKey::Temperature => "Temperature",
            MetricKey::Humidity => "Humidity",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKey::Pm2_5 => "µg/m³",
            MetricKey::Co | MetricKey::Nh3 => "ppm",
            MetricKey::Temperature => "°C",
            MetricKey::Humidity => "%",
        }
    }

    /// The display name followed by the unit, e.g. `Temperature (°C)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.display_name(), self.unit())
    }

    /// The position of the metric in the canonical column order.
    pub(crate) fn position(&self) -> usize {
        match self {
            MetricKey::Pm2_5 => 0,
            MetricKey::Co => 1,
            MetricKey::Nh3 => 2,
            MetricKey::Temperature => 3,
            MetricKey::Humidity => 4,
        }
    }
}

impl Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKey {
    type Err = ReadingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKey::ALL
            .into_iter()
            .find(|metric| metric.name() == s.trim())
            .ok_or_else(|| ReadingsError::UnknownMetric(s.to_owned()))
    }
}
