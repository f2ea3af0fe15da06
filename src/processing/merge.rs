//! Block set canonicalization.
//!
//! Reduces any collection of blocks to its unique minimal form: sorted,
//! pairwise disjoint, nothing nested, and no two neighbours that could be
//! joined into their parent.

use super::family::{by_family, FamilySplit};
use crate::models::Block;

/// Merge blocks into the smallest list of the largest possible blocks that
/// covers the same addresses.
///
/// Input may hold duplicates, nested and adjacent blocks of both families.
/// IPv4 results come first, then IPv6, each sorted ascending.
///
/// # Examples
/// ```
/// use subnet_algebra::models::Block;
/// use subnet_algebra::processing::merge;
///
/// let blocks: Vec<Block> = ["10.0.0.0/8", "11.0.0.0/8"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(merge(&blocks), vec!["10.0.0.0/7".parse::<Block>().unwrap()]);
/// ```
pub fn merge(blocks: &[Block]) -> Vec<Block> {
    log::debug!("merge() got {} blocks", blocks.len());
    let FamilySplit { v4, v6 } = by_family(blocks);
    let mut merged = merge_family(v4);
    merged.extend(merge_family(v6));
    log::debug!("merge() returns {} blocks", merged.len());
    merged
}

/// Canonicalize blocks that all belong to one family.
pub(crate) fn merge_family(mut blocks: Vec<Block>) -> Vec<Block> {
    // Larger blocks first at an equal start, so a nested block always
    // follows the block that contains it.
    blocks.sort_unstable();
    blocks.dedup();

    let outermost = drop_contained(blocks);
    join_siblings(outermost)
}

/// Drop every block contained in an earlier one. Input must be sorted.
///
/// Prefix blocks either nest or are disjoint, so a block can only be
/// contained in the last block kept so far.
fn drop_contained(blocks: Vec<Block>) -> Vec<Block> {
    let mut kept: Vec<Block> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match kept.last() {
            Some(last) if last.contains(&block) => {
                log::trace!("merge: {block} is inside {last}");
            }
            _ => kept.push(block),
        }
    }
    kept
}

/// Join sibling pairs into their parent until no sibling pair remains.
///
/// One forward sweep with a stack: each incoming block is joined with the
/// top of the stack for as long as they are siblings, since a new parent can
/// be the sibling of the block before it. Every join removes one block, so
/// the sweep does at most `n - 1` joins.
fn join_siblings(blocks: Vec<Block>) -> Vec<Block> {
    let mut joined: Vec<Block> = Vec::with_capacity(blocks.len());
    for block in blocks {
        let mut current = block;
        while let Some(top) = joined.last() {
            if !top.is_sibling_of(&current) {
                break;
            }
            let Some(parent) = current.parent() else {
                break;
            };
            log::trace!("merge: {top} + {current} -> {parent}");
            joined.pop();
            current = parent;
        }
        joined.push(current);
    }
    joined
}
