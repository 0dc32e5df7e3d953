use crate::metric::MetricKey;

/// A single measurement. `None` marks a cell that was absent or could not be
/// read as a finite number.
pub type Reading = Option<f64>;

/// One row of sensor readings.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Record {
    pub pm2_5: Reading,
    pub co: Reading,
    pub nh3: Reading,
    pub temperature: Reading,
    pub humidity: Reading,
}

impl Record {
    pub fn new(
        pm2_5: Reading,
        co: Reading,
        nh3: Reading,
        temperature: Reading,
        humidity: Reading,
    ) -> Record {
        Self {
            pm2_5,
            co,
            nh3,
            temperature,
            humidity,
        }
    }

    pub fn get(&self, metric: MetricKey) -> Reading {
        match metric {
            MetricKey::Pm2_5 => self.pm2_5,
            MetricKey::Co => self.co,
            MetricKey::Nh3 => self.nh3,
            MetricKey::Temperature => self.temperature,
            MetricKey::Humidity => self.humidity,
        }
    }

    pub(crate) fn set(&mut self, metric: MetricKey, reading: Reading) {
        let field = match metric {
            MetricKey::Pm2_5 => &mut self.pm2_5,
            MetricKey::Co => &mut self.co,
            MetricKey::Nh3 => &mut self.nh3,
            MetricKey::Temperature => &mut self.temperature,
            MetricKey::Humidity => &mut self.humidity,
        };

        *field = reading;
    }
}
