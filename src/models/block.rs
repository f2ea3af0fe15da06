//! CIDR block value type.
//!
//! A [`Block`] is an aligned, power-of-two sized address range: a base
//! address plus a prefix length. The base never has bits set below the
//! prefix, so two blocks are equal exactly when they cover the same range.

use super::bits::{cut_value, host_mask};
use super::{Address, AddressFamily};
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// An IPv4 or IPv6 network prefix.
///
/// Ordering is by family, then base address, then prefix length, so at an
/// equal start the larger block sorts first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Block {
    family: AddressFamily,
    base: u128,
    len: u8,
}

impl Block {
    /// Build a block, rejecting prefix lengths past the family width and
    /// addresses with host bits set.
    pub fn normalize(address: Address, len: u8) -> Result<Block, CidrError> {
        let family = address.family();
        if len > family.width() {
            return Err(CidrError::InvalidPrefix {
                address: address.to_string(),
                prefix_len: u32::from(len),
                reason: "prefix length is too long",
            });
        }
        if address.value() & host_mask(family.width() - len) != 0 {
            return Err(CidrError::InvalidPrefix {
                address: address.to_string(),
                prefix_len: u32::from(len),
                reason: "address has bits set below the prefix",
            });
        }
        Ok(Block {
            family,
            base: address.value(),
            len,
        })
    }

    /// Build the block of length `len` containing `address`, clearing any
    /// host bits. Only the prefix length is checked.
    pub fn from_ip_prefix(address: Address, len: u8) -> Result<Block, CidrError> {
        let family = address.family();
        let base = cut_value(family, address.value(), len).ok_or_else(|| {
            CidrError::InvalidPrefix {
                address: address.to_string(),
                prefix_len: u32::from(len),
                reason: "prefix length is too long",
            }
        })?;
        Ok(Block { family, base, len })
    }

    /// Internal constructor; `base` must already be aligned to `len`.
    pub(crate) fn from_parts(family: AddressFamily, base: u128, len: u8) -> Block {
        debug_assert!(len <= family.width());
        debug_assert_eq!(base & host_mask(family.width() - len), 0);
        Block { family, base, len }
    }

    /// The single block covering exactly `[lo, hi]`.
    ///
    /// Fails with `InvalidRange` if the range is reversed or is not one
    /// aligned power-of-two block; use
    /// [`range_to_cidrs`](crate::processing::range_to_cidrs) for arbitrary ranges.
    pub fn from_range(lo: Address, hi: Address) -> Result<Block, CidrError> {
        if lo.family() != hi.family() {
            return Err(CidrError::AddressFamilyMismatch {
                left: lo.family(),
                right: hi.family(),
            });
        }
        let invalid = || CidrError::InvalidRange {
            lo: lo.to_string(),
            hi: hi.to_string(),
        };
        if lo > hi {
            return Err(invalid());
        }
        let span = hi.value() - lo.value();
        // span + 1 must be a power of two, and lo aligned to it
        if span & span.wrapping_add(1) != 0 || lo.value() & span != 0 {
            return Err(invalid());
        }
        let family = lo.family();
        let len = family.width() - span.count_ones() as u8;
        Ok(Block::from_parts(family, lo.value(), len))
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    pub fn network(&self) -> Address {
        Address::from_parts(self.family, self.base)
    }

    /// First address in the block (same as [`network`](Self::network)).
    pub fn first(&self) -> Address {
        self.network()
    }

    /// Last (broadcast) address in the block.
    pub fn last(&self) -> Address {
        Address::from_parts(self.family, self.end_value())
    }

    pub(crate) fn start_value(&self) -> u128 {
        self.base
    }

    pub(crate) fn end_value(&self) -> u128 {
        self.base | host_mask(self.host_bits())
    }

    fn host_bits(&self) -> u8 {
        self.family.width() - self.len
    }

    /// log2 of the number of addresses in the block.
    pub fn size_log2(&self) -> u8 {
        self.host_bits()
    }

    /// Number of addresses in the block, or `None` for `::/0` whose size
    /// (2^128) does not fit in a `u128`.
    pub fn size(&self) -> Option<u128> {
        1u128.checked_shl(u32::from(self.host_bits()))
    }

    pub fn to_range(&self) -> (Address, Address) {
        (self.first(), self.last())
    }

    /// True if the two blocks share at least one address.
    pub fn overlaps(&self, other: &Block) -> bool {
        self.family == other.family
            && self.start_value() <= other.end_value()
            && other.start_value() <= self.end_value()
    }

    /// True if every address of `other` is inside this block.
    pub fn contains(&self, other: &Block) -> bool {
        self.family == other.family
            && self.start_value() <= other.start_value()
            && other.end_value() <= self.end_value()
    }

    pub fn contains_address(&self, address: &Address) -> bool {
        self.family == address.family()
            && self.start_value() <= address.value()
            && address.value() <= self.end_value()
    }

    /// True if the two blocks are the two halves of one parent block.
    pub fn is_sibling_of(&self, other: &Block) -> bool {
        self.family == other.family
            && self.len == other.len
            && self.len > 0
            && self.base ^ other.base == 1u128 << self.host_bits()
    }

    /// The block one bit shorter that contains this one. `None` at `/0`.
    pub fn parent(&self) -> Option<Block> {
        let len = self.len.checked_sub(1)?;
        let base = self.base & !host_mask(self.family.width() - len);
        Some(Block::from_parts(self.family, base, len))
    }

    /// Split into the lower and upper half. `None` for a single address.
    pub fn halves(&self) -> Option<(Block, Block)> {
        if self.len == self.family.width() {
            return None;
        }
        let len = self.len + 1;
        let upper = self.base | 1u128 << (self.family.width() - len);
        Some((
            Block::from_parts(self.family, self.base, len),
            Block::from_parts(self.family, upper, len),
        ))
    }
}

impl FromStr for Block {
    type Err = CidrError;

    /// Parse `a.b.c.d/n` or `x:y::z/n`. Host bits are cleared, so
    /// `10.1.2.3/8` parses to `10.0.0.0/8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, len) = s
            .split_once('/')
            .ok_or_else(|| CidrError::InvalidAddress(format!("missing prefix length: {s}")))?;
        let address: Address = addr.parse()?;
        if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CidrError::InvalidAddress(format!(
                "invalid prefix length: {s}"
            )));
        }
        // all digits: anything that does not fit is simply too long
        let len = len.parse::<u32>().unwrap_or(u32::MAX);
        match u8::try_from(len) {
            Ok(len) => Block::from_ip_prefix(address, len),
            Err(_) => Err(CidrError::InvalidPrefix {
                address: address.to_string(),
                prefix_len: len,
                reason: "prefix length is too long",
            }),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.len)
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Block, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
