//! Loading block lists from files.
//!
//! - [`list`] - JSON and plain text block list parsing

mod list;

pub use list::{parse_block_json, parse_block_text, read_block_list, InputError};
