//! Prefix mask arithmetic shared by IPv4 and IPv6.
//!
//! Every value is carried in a `u128`; IPv4 values only ever use the low
//! 32 bits, so one set of helpers serves both families.

use super::AddressFamily;

/// Mask with the low `host_bits` bits set.
///
/// `host_bits` of 128 (an IPv6 /0) yields all ones rather than overflowing
/// the shift.
pub fn host_mask(host_bits: u8) -> u128 {
    1u128
        .checked_shl(u32::from(host_bits))
        .map_or(u128::MAX, |bit| bit - 1)
}

/// Network mask for a prefix length, e.g. `/24` in IPv4 is `0xFFFFFF00`.
///
/// Returns `None` if `len` is longer than the family allows.
///
/// # Examples
/// ```
/// use subnet_algebra::models::{prefix_mask, AddressFamily};
/// assert_eq!(prefix_mask(AddressFamily::V4, 24), Some(0xFFFF_FF00));
/// ```
pub fn prefix_mask(family: AddressFamily, len: u8) -> Option<u128> {
    let width = family.width();
    if len > width {
        return None;
    }
    Some(family.max_value() & !host_mask(width - len))
}

/// Lowest address of the block of length `len` that contains `value`.
pub fn cut_value(family: AddressFamily, value: u128, len: u8) -> Option<u128> {
    prefix_mask(family, len).map(|mask| value & mask)
}

/// Highest (broadcast) address of the block of length `len` that contains `value`.
pub fn broadcast_value(family: AddressFamily, value: u128, len: u8) -> Option<u128> {
    let width = family.width();
    cut_value(family, value, len).map(|base| base | host_mask(width - len))
}

/// Shortest prefix length at which `value` is a valid network address.
///
/// Derived from the trailing zero bits of `value`; zero is aligned to every
/// length, so it yields `/0`.
pub fn lo_mask(family: AddressFamily, value: u128) -> u8 {
    let width = family.width();
    if value == 0 {
        return 0;
    }
    let trailing_zeros = value.trailing_zeros().min(u32::from(width)) as u8;
    width - trailing_zeros
}

/// Floor of log2 of the number of addresses in `[lo, hi]`.
///
/// The count itself can be 2^128 for the full IPv6 space, which does not fit
/// in a `u128`, so it is derived from the span `hi - lo` instead.
pub fn span_log2(lo: u128, hi: u128) -> u8 {
    debug_assert!(lo <= hi);
    match (hi - lo).checked_add(1) {
        Some(count) => (127 - count.leading_zeros()) as u8,
        None => 128,
    }
}
