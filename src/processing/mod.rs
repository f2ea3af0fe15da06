//! Set algebra over block collections.
//!
//! This module contains the operations on [`Block`](crate::models::Block) lists:
//! - [`range`] - Decomposing an address range into CIDR blocks
//! - [`merge`] - Canonicalizing a block list
//! - [`remove`] - Difference of two block lists
//! - [`subset`] - Intersection of two block lists
//! - [`diff`] - Three-way comparison with an overlap status
//!
//! Mixed IPv4/IPv6 input is split by family before any of these run, and the
//! two families never interact.

mod diff;
mod family;
mod merge;
mod range;
mod remove;
mod subset;

// Re-export public functions
pub use diff::{diff, DiffResult, DiffStatus};
pub use merge::merge;
pub use range::range_to_cidrs;
pub use remove::remove;
pub use subset::subset;
