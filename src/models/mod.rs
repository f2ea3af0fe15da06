//! Address and block value types.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`AddressFamily`] - IPv4 or IPv6, with its bit width
//! - [`Address`] - a family-tagged address value
//! - [`Block`] - an aligned CIDR block with containment/overlap/sibling predicates
//!
//! plus the mask helpers both families share.

mod address;
mod bits;
mod block;
mod family;

// Re-export public types
pub use address::Address;
pub use bits::{broadcast_value, cut_value, host_mask, lo_mask, prefix_mask, span_log2};
pub use block::Block;
pub use family::AddressFamily;
