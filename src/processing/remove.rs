//! Set difference of two block collections.

use super::family::per_family;
use super::merge::merge_family;
use super::range::decompose;
use crate::models::{AddressFamily, Block};

/// Return the addresses of `blocks` that are not in `removals`, as a merged
/// block list.
///
/// Both inputs are canonicalized first. An empty `removals` gives back
/// `merge(blocks)`; an empty `blocks` gives an empty result.
///
/// # Examples
/// ```
/// use subnet_algebra::models::Block;
/// use subnet_algebra::processing::remove;
///
/// let all: Vec<Block> = vec!["10.0.0.0/8".parse().unwrap()];
/// let cut: Vec<Block> = vec!["10.0.0.0/9".parse().unwrap()];
/// assert_eq!(remove(&all, &cut), vec!["10.128.0.0/9".parse::<Block>().unwrap()]);
/// ```
pub fn remove(blocks: &[Block], removals: &[Block]) -> Vec<Block> {
    log::debug!(
        "remove() {} blocks minus {} blocks",
        blocks.len(),
        removals.len()
    );
    per_family(blocks, removals, remove_family)
}

/// Difference of two canonical single-family lists.
///
/// Both lists are sorted and disjoint, so one forward pass over `removals`
/// finds every cut for each block.
fn remove_family(family: AddressFamily, blocks: &[Block], removals: &[Block]) -> Vec<Block> {
    if removals.is_empty() {
        return blocks.to_vec();
    }

    let mut fragments = Vec::with_capacity(blocks.len());
    let mut first_cut = 0;

    for block in blocks {
        let (start, end) = (block.start_value(), block.end_value());

        while first_cut < removals.len() && removals[first_cut].end_value() < start {
            first_cut += 1;
        }

        let cuts = removals[first_cut..]
            .iter()
            .take_while(|cut| cut.start_value() <= end);

        // `cursor` is the first address of `block` not yet accounted for;
        // `None` once the cuts reach the end of the block.
        let mut cursor = Some(start);
        let mut touched = false;
        for cut in cuts {
            touched = true;
            let Some(from) = cursor else { break };
            if cut.start_value() > from {
                fragments.extend(decompose(family, from, cut.start_value() - 1));
            }
            cursor = if cut.end_value() >= end {
                None
            } else {
                Some(cut.end_value() + 1)
            };
        }

        match (touched, cursor) {
            (false, _) => fragments.push(*block),
            (true, Some(from)) => fragments.extend(decompose(family, from, end)),
            (true, None) => log::trace!("remove: {block} fully removed"),
        }
    }

    // Fragments of neighbouring blocks can be siblings of each other.
    merge_family(fragments)
}
