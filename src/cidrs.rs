//! Text-level versions of the block set operations.
//!
//! Each function parses CIDR strings (`10.0.0.0/8`, `fd00::/8`) or bare
//! addresses, runs the typed operation and formats the result back into
//! canonical CIDR strings.

use crate::error::CidrError;
use crate::models::{Address, Block};
use crate::processing::{self, DiffStatus};
use serde::Serialize;

/// [`processing::diff`] result with every block formatted as text.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CidrDiff {
    pub left_only: Vec<String>,
    pub both: Vec<String>,
    pub right_only: Vec<String>,
    pub status: DiffStatus,
}

/// Parse a list of CIDR strings. Host bits below the prefix are cleared.
pub fn parse_blocks<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<Block>, CidrError> {
    cidrs.iter().map(|cidr| cidr.as_ref().parse()).collect()
}

pub fn to_cidr_strings(blocks: &[Block]) -> Vec<String> {
    blocks.iter().map(|block| block.to_string()).collect()
}

/// Merge CIDR strings into the minimal list of CIDRs.
///
/// # Examples
/// ```
/// use subnet_algebra::cidrs::merge_cidrs;
/// assert_eq!(merge_cidrs(&["10.0.0.0/8", "11.0.0.0/8"]).unwrap(), ["10.0.0.0/7"]);
/// ```
pub fn merge_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<String>, CidrError> {
    let blocks = parse_blocks(cidrs)?;
    Ok(to_cidr_strings(&processing::merge(&blocks)))
}

/// CIDRs in `cidrs` that are not in `removals`.
pub fn remove_cidrs<S: AsRef<str>>(
    cidrs: &[S],
    removals: &[S],
) -> Result<Vec<String>, CidrError> {
    let blocks = parse_blocks(cidrs).map_err(|e| e.in_stage("cidrs"))?;
    let removals = parse_blocks(removals).map_err(|e| e.in_stage("removals"))?;
    Ok(to_cidr_strings(&processing::remove(&blocks, &removals)))
}

/// CIDRs present in both `cidrs` and `subsets`.
pub fn subset_cidrs<S: AsRef<str>>(
    cidrs: &[S],
    subsets: &[S],
) -> Result<Vec<String>, CidrError> {
    let blocks = parse_blocks(cidrs).map_err(|e| e.in_stage("cidrs"))?;
    let subsets = parse_blocks(subsets).map_err(|e| e.in_stage("subsets"))?;
    Ok(to_cidr_strings(&processing::subset(&blocks, &subsets)))
}

/// Compare two CIDR lists. `None` marks an unset side and fails with
/// `MissingInput`; an empty list is fine.
pub fn diff_cidrs<S: AsRef<str>>(
    left: Option<&[S]>,
    right: Option<&[S]>,
) -> Result<CidrDiff, CidrError> {
    let left = left
        .map(parse_blocks)
        .transpose()
        .map_err(|e| e.in_stage("left"))?;
    let right = right
        .map(parse_blocks)
        .transpose()
        .map_err(|e| e.in_stage("right"))?;

    let result = processing::diff(left.as_deref(), right.as_deref())?;
    Ok(CidrDiff {
        left_only: to_cidr_strings(&result.left_only),
        both: to_cidr_strings(&result.both),
        right_only: to_cidr_strings(&result.right_only),
        status: result.status,
    })
}

/// Express the inclusive range between two bare addresses as CIDRs.
///
/// # Examples
/// ```
/// use subnet_algebra::cidrs::ip_range_to_cidrs;
/// assert_eq!(
///     ip_range_to_cidrs("10.0.0.0", "10.0.1.255").unwrap(),
///     ["10.0.0.0/23"]
/// );
/// ```
pub fn ip_range_to_cidrs(lo: &str, hi: &str) -> Result<Vec<String>, CidrError> {
    let lo = lo.parse::<Address>().map_err(|e| e.in_stage("lo"))?;
    let hi = hi.parse::<Address>().map_err(|e| e.in_stage("hi"))?;
    Ok(to_cidr_strings(&processing::range_to_cidrs(lo, hi)?))
}
