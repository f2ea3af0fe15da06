//! Set algebra over IPv4 and IPv6 CIDR blocks.
//!
//! The typed operations live in [`processing`] and work on [`models::Block`]
//! values; [`cidrs`] offers the same operations on CIDR strings.
//!
//! Module layout:
//! - [`models`] - Address, block and family types
//! - [`processing`] - merge, remove, subset, diff and range decomposition
//! - [`cidrs`] - String in, string out wrappers
//! - [`input`] - Reading block lists from files
//! - [`output`] - CSV, JSON and terminal formatting
//! - [`config`] - Binary configuration from arguments and environment

pub mod cidrs;
pub mod config;
mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CidrError;
pub use models::{Address, AddressFamily, Block};
pub use processing::{diff, merge, range_to_cidrs, remove, subset, DiffResult, DiffStatus};
