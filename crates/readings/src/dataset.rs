use std::ops::Index;

use crate::record::Record;

/// An ordered sequence of records from a single load.
///
/// The order is significant: a record's position is its position on the
/// x axis of every chart derived from the dataset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Dataset {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;

    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for Dataset {
    type Output = Record;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterate_in_load_order() {
        let dataset = Dataset::new(vec![
            Record::new(Some(1.0), None, None, None, None),
            Record::new(Some(2.0), None, None, None, None),
        ]);

        let mut readings = Vec::new();
        for record in &dataset {
            readings.push(record.pm2_5);
        }

        assert_eq!(vec![Some(1.0), Some(2.0)], readings);
        assert_eq!(Some(2.0), dataset[1].pm2_5);
        assert_eq!(2, dataset.len());
        assert!(!dataset.is_empty());
    }
}
