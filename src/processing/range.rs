//! Range decomposition.
//!
//! Expresses an arbitrary inclusive address range as the shortest ascending
//! list of CIDR blocks covering exactly that range.

use crate::error::CidrError;
use crate::models::{host_mask, lo_mask, span_log2, Address, AddressFamily, Block};

/// Decompose the inclusive range `[lo, hi]` into the minimal ordered list of
/// CIDR blocks that covers it exactly.
///
/// # Errors
/// * `AddressFamilyMismatch` if `lo` and `hi` are different families
/// * `InvalidRange` if `lo > hi`
///
/// # Examples
/// ```
/// use subnet_algebra::models::Address;
/// use subnet_algebra::processing::range_to_cidrs;
///
/// let lo: Address = "192.168.1.1".parse().unwrap();
/// let hi: Address = "192.168.1.4".parse().unwrap();
/// let blocks: Vec<String> = range_to_cidrs(lo, hi)
///     .unwrap()
///     .iter()
///     .map(|b| b.to_string())
///     .collect();
/// assert_eq!(blocks, ["192.168.1.1/32", "192.168.1.2/31", "192.168.1.4/32"]);
/// ```
pub fn range_to_cidrs(lo: Address, hi: Address) -> Result<Vec<Block>, CidrError> {
    if lo.family() != hi.family() {
        return Err(CidrError::AddressFamilyMismatch {
            left: lo.family(),
            right: hi.family(),
        });
    }
    if lo > hi {
        return Err(CidrError::InvalidRange {
            lo: lo.to_string(),
            hi: hi.to_string(),
        });
    }
    let blocks = decompose(lo.family(), lo.value(), hi.value());
    log::debug!(
        "range_to_cidrs({lo}, {hi}) -> {count} blocks",
        count = blocks.len()
    );
    Ok(blocks)
}

/// Greedy decomposition of `[lo, hi]`, both already validated.
///
/// At each step the block starting at the cursor is as large as both the
/// cursor's alignment and the remaining span allow.
pub(crate) fn decompose(family: AddressFamily, lo: u128, hi: u128) -> Vec<Block> {
    debug_assert!(lo <= hi && hi <= family.max_value());
    let width = family.width();
    let mut blocks = Vec::new();
    let mut cursor = lo;

    loop {
        let len_by_alignment = lo_mask(family, cursor);
        let len_by_size = width - span_log2(cursor, hi);
        let len = len_by_alignment.max(len_by_size);

        let block = Block::from_parts(family, cursor, len);
        log::trace!("decompose: emit {block}");
        blocks.push(block);

        let last = cursor | host_mask(width - len);
        // `last` never exceeds `hi`; stopping on equality keeps `cursor`
        // from wrapping past the top of the address space.
        if last >= hi {
            break;
        }
        cursor = last + 1;
    }

    blocks
}
