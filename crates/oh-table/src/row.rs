//! Single-row view over a data frame.

use oh_common::Value;
use polars::prelude::DataFrame;

use crate::any::value_from_any;

/// One row of a [`DataFrame`], addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    frame: &'a DataFrame,
    index: usize,
}

impl<'a> Row<'a> {
    /// Row `index` of `frame`, or `None` past the last row.
    pub fn new(frame: &'a DataFrame, index: usize) -> Option<Self> {
        (index < frame.height()).then_some(Self { frame, index })
    }

    /// Position of this row within its frame.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True when the frame declares `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.frame.get_column_index(column).is_some()
    }

    /// Cell value for `column`.
    ///
    /// `None` when the frame has no such column. A declared column with a
    /// null cell yields `Some(Value::Null)`.
    pub fn get_value(&self, column: &str) -> Option<Value> {
        let Some(position) = self.frame.get_column_index(column) else {
            tracing::trace!(column, "column not present in row");
            return None;
        };
        let cell = self.frame.get_columns().get(position)?.get(self.index).ok()?;
        Some(value_from_any(cell))
    }

    /// Value of the first column in `columns` that the frame declares.
    ///
    /// A declared column wins even when its cell is null.
    pub fn get_first_value(&self, columns: &[&str]) -> Option<Value> {
        columns
            .iter()
            .find(|column| self.has_column(column))
            .and_then(|column| self.get_value(column))
    }

    /// True for a missing column, a null cell, or a cell that renders as `""`.
    pub fn column_is_null_or_empty(&self, column: &str) -> bool {
        self.get_value(column)
            .is_none_or(|value| value.to_string().is_empty())
    }
}

/// Iterates every row of `frame` in order.
pub fn rows(frame: &DataFrame) -> impl Iterator<Item = Row<'_>> {
    (0..frame.height()).map(move |index| Row { frame, index })
}
