//! Splitting mixed IPv4/IPv6 input so each family is processed on its own.

use super::merge::merge_family;
use crate::models::{AddressFamily, Block};
use itertools::{Either, Itertools};

/// Blocks of one collection, separated by family.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct FamilySplit {
    pub v4: Vec<Block>,
    pub v6: Vec<Block>,
}

pub(crate) fn by_family(blocks: &[Block]) -> FamilySplit {
    let (v4, v6): (Vec<Block>, Vec<Block>) =
        blocks.iter().partition_map(|block| match block.family() {
            AddressFamily::V4 => Either::Left(*block),
            AddressFamily::V6 => Either::Right(*block),
        });
    FamilySplit { v4, v6 }
}

/// Apply a single-family pairwise operation to each family of `a` and `b`
/// and concatenate the results, IPv4 first.
///
/// `op` always receives two canonical (merged) inputs of the same family.
pub(crate) fn per_family<F>(a: &[Block], b: &[Block], op: F) -> Vec<Block>
where
    F: Fn(AddressFamily, &[Block], &[Block]) -> Vec<Block>,
{
    let a = by_family(a);
    let b = by_family(b);

    let mut out = op(AddressFamily::V4, &merge_family(a.v4), &merge_family(b.v4));
    out.extend(op(AddressFamily::V6, &merge_family(a.v6), &merge_family(b.v6)));
    out
}
