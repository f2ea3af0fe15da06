//! Intersection of two block collections.

use super::family::per_family;
use super::merge::merge_family;
use super::range::decompose;
use crate::models::{AddressFamily, Block};

/// Return the addresses present in both `blocks` and `subsets`, as a merged
/// block list.
///
/// Both inputs are canonicalized first, so `subset(a, a) == merge(a)`. If
/// either side is empty the result is empty.
///
/// # Examples
/// ```
/// use subnet_algebra::models::Block;
/// use subnet_algebra::processing::subset;
///
/// let nets: Vec<Block> = vec!["10.0.0.0/8".parse().unwrap(), "0.0.0.0/0".parse().unwrap()];
/// let keep: Vec<Block> = vec!["127.0.0.0/8".parse().unwrap()];
/// assert_eq!(subset(&nets, &keep), keep);
/// ```
pub fn subset(blocks: &[Block], subsets: &[Block]) -> Vec<Block> {
    log::debug!(
        "subset() {} blocks within {} blocks",
        blocks.len(),
        subsets.len()
    );
    per_family(blocks, subsets, subset_family)
}

/// Intersection of two canonical single-family lists.
fn subset_family(family: AddressFamily, blocks: &[Block], subsets: &[Block]) -> Vec<Block> {
    let mut fragments = Vec::new();
    let (mut i, mut j) = (0, 0);

    while let (Some(a), Some(b)) = (blocks.get(i), subsets.get(j)) {
        if a.overlaps(b) {
            let lo = a.start_value().max(b.start_value());
            let hi = a.end_value().min(b.end_value());
            log::trace!("subset: {a} & {b}");
            fragments.extend(decompose(family, lo, hi));
        }
        // advance whichever block finishes first; the other may still
        // overlap the next one
        if a.end_value() < b.end_value() {
            i += 1;
        } else {
            j += 1;
        }
    }

    merge_family(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(cidrs: &[&str]) -> Vec<Block> {
        cidrs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn subsetted(a: &[&str], b: &[&str]) -> Vec<String> {
        subset(&blocks(a), &blocks(b))
            .iter()
            .map(|b| b.to_string())
            .collect()
    }

    #[test]
    fn test_subset_empty_sides() {
        assert!(subsetted(&[], &[]).is_empty());
        assert!(subsetted(&["10.0.0.0/8"], &[]).is_empty());
        assert!(subsetted(&[], &["10.0.0.0/8"]).is_empty());
        assert!(subsetted(&["::/0"], &[]).is_empty());
    }

    #[test]
    fn test_subset_self_is_merge() {
        assert_eq!(subsetted(&["10.0.0.0/8"], &["10.0.0.0/8"]), ["10.0.0.0/8"]);
        assert_eq!(
            subsetted(&["10.0.0.0/8", "10.0.0.0/8"], &["10.0.0.0/8"]),
            ["10.0.0.0/8"]
        );
    }

    #[test]
    fn test_subset_merges_input_first() {
        assert_eq!(
            subsetted(&["192.0.128.0/24", "192.0.129.0/24"], &["192.0.0.0/16"]),
            ["192.0.128.0/23"]
        );
    }

    #[test]
    fn test_subset_smaller_side_wins() {
        assert_eq!(
            subsetted(&["10.0.0.0/8", "0.0.0.0/0"], &["127.0.0.0/8"]),
            ["127.0.0.0/8"]
        );
        assert_eq!(
            subsetted(
                &["192.0.128.0/24", "192.0.129.0/24"],
                &["192.0.128.128/25", "192.0.129.0/25"]
            ),
            ["192.0.128.128/25", "192.0.129.0/25"]
        );
        assert_eq!(
            subsetted(&["172.16.8.0/20"], &["172.16.12.0/24", "172.16.14.0/24"]),
            ["172.16.12.0/24", "172.16.14.0/24"]
        );
    }

    #[test]
    fn test_subset_partial_lists() {
        assert_eq!(
            subsetted(&["192.0.128.0/24", "192.0.139.0/24"], &["192.0.128.0/23"]),
            ["192.0.128.0/24"]
        );
        let five = [
            "172.16.10.0/24",
            "172.16.11.0/24",
            "172.16.12.0/24",
            "172.16.13.0/24",
            "172.16.14.0/24",
        ];
        assert_eq!(subsetted(&five, &["172.16.8.0/22"]), ["172.16.10.0/23"]);
        assert_eq!(
            subsetted(&five, &["172.16.12.0/22"]),
            ["172.16.12.0/23", "172.16.14.0/24"]
        );
        assert_eq!(
            subsetted(&five, &["172.16.8.0/21"]),
            ["172.16.10.0/23", "172.16.12.0/23", "172.16.14.0/24"]
        );
    }

    #[test]
    fn test_subset_many_to_many() {
        assert_eq!(
            subsetted(
                &[
                    "10.0.0.0/8",
                    "172.16.10.0/24",
                    "172.16.11.0/24",
                    "172.16.12.0/24",
                    "172.16.13.0/24",
                    "172.16.14.0/24",
                    "192.0.128.0/23",
                    "192.0.139.0/24",
                ],
                &[
                    "172.16.8.0/22",
                    "10.10.10.0/24",
                    "172.16.13.0/24",
                    "172.16.14.128/26",
                ]
            ),
            [
                "10.10.10.0/24",
                "172.16.10.0/23",
                "172.16.13.0/24",
                "172.16.14.128/26"
            ]
        );
    }

    #[test]
    fn test_subset_v6_and_mixed() {
        assert_eq!(
            subsetted(&["fd00::/8", "::/0"], &["2001:db8:0:2::/64"]),
            ["2001:db8:0:2::/64"]
        );
        assert!(subsetted(&["fd00::/8"], &["10.0.0.0/8"]).is_empty());
        assert_eq!(
            subsetted(&["0.0.0.0/0", "::/0"], &["fd00::/8", "10.0.0.0/8"]),
            ["10.0.0.0/8", "fd00::/8"]
        );
    }
}
