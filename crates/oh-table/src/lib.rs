//! Row access over Polars data frames that tolerates missing columns.
//!
//! Column presence is always checked against the frame's column index before
//! a cell is read, so asking for an undeclared column yields `None` instead of
//! an error.

mod any;
mod dataset;
mod row;

pub use any::value_from_any;
pub use dataset::{DataSet, OUTPUT_PARAMETERS_TABLE};
pub use row::{Row, rows};
