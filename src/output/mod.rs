//! Output formatting for diff results.
//!
//! This module handles formatting and printing block set results:
//! - [`csv`] - CSV rows in address order
//! - [`terminal`] - Quoted fields and coloured status

mod csv;
mod terminal;

pub use csv::{diff_rows, print_diff_csv, print_diff_json, DiffRow, Side};
pub use terminal::{format_field, status_label};
