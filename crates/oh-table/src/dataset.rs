//! Ordered collection of named tables.

use oh_common::Value;
use polars::prelude::DataFrame;

use crate::row::Row;

/// Name of the table that carries stored-procedure output parameters.
pub const OUTPUT_PARAMETERS_TABLE: &str = "OutputParameters";

/// Named data frames in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    tables: Vec<(String, DataFrame)>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a table (builder form).
    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>, frame: DataFrame) -> Self {
        self.push_table(name, frame);
        self
    }

    /// Appends a table.
    pub fn push_table(&mut self, name: impl Into<String>, frame: DataFrame) {
        self.tables.push((name.into(), frame));
    }

    /// First table with this name.
    pub fn table(&self, name: &str) -> Option<&DataFrame> {
        self.tables
            .iter()
            .find(|(table, _)| table == name)
            .map(|(_, frame)| frame)
    }

    /// Tables in insertion order.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &DataFrame)> {
        self.tables
            .iter()
            .map(|(name, frame)| (name.as_str(), frame))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// True when the first table has at least one row.
    pub fn has_data(&self) -> bool {
        self.tables.first().is_some_and(|(_, frame)| frame.height() > 0)
    }

    /// True when the output parameter table exists and has a row.
    pub fn has_output_parameters(&self) -> bool {
        self.table(OUTPUT_PARAMETERS_TABLE)
            .is_some_and(|frame| frame.height() > 0)
    }

    /// Value of the named output parameter from the first row.
    pub fn output_parameter_value(&self, name: &str) -> Option<Value> {
        let frame = self.table(OUTPUT_PARAMETERS_TABLE)?;
        Row::new(frame, 0)?.get_value(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_empty_dataset_has_no_data() {
        let set = DataSet::new();
        assert!(set.is_empty());
        assert!(!set.has_data());
        assert!(!set.has_output_parameters());
        assert_eq!(set.output_parameter_value("Total"), None);
    }

    #[test]
    fn test_has_data_checks_first_table_only() {
        let empty =
            DataFrame::new(vec![Series::new("A".into(), Vec::<i32>::new()).into()]).unwrap();
        let full = DataFrame::new(vec![Series::new("A".into(), &[1i32]).into()]).unwrap();
        let set = DataSet::new().with_table("first", empty).with_table("second", full);
        assert_eq!(set.len(), 2);
        assert!(!set.has_data());
    }
}
