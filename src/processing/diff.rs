//! Comparison of two block collections.
//!
//! Splits two collections into what only the left has, what both have and
//! what only the right has, and classifies how the two relate.

use super::{merge, remove, subset};
use crate::error::CidrError;
use crate::models::Block;
use serde::Serialize;
use std::fmt;

/// How two compared collections relate to each other.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DiffStatus {
    /// Both inputs were empty.
    BothEmpty,
    /// Left input was empty, right was not.
    RightOnly,
    /// Right input was empty, left was not.
    LeftOnly,
    /// Neither input shares any address with the other.
    NoOverlap,
    /// Both inputs cover exactly the same addresses.
    Identical,
    /// Everything in left is also in right, and right has more.
    LeftSubsumedByRight,
    /// Everything in right is also in left, and left has more.
    RightSubsumedByLeft,
    /// Some shared addresses, and each side has addresses of its own.
    PartialOverlap,
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DiffStatus::BothEmpty => "both inputs empty",
            DiffStatus::RightOnly => "only right input has blocks",
            DiffStatus::LeftOnly => "only left input has blocks",
            DiffStatus::NoOverlap => "no overlap",
            DiffStatus::Identical => "identical",
            DiffStatus::LeftSubsumedByRight => "left is contained in right",
            DiffStatus::RightSubsumedByLeft => "right is contained in left",
            DiffStatus::PartialOverlap => "partial overlap",
        };
        f.write_str(text)
    }
}

/// Outcome of [`diff`]. Every list is canonical (merged).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    pub left_only: Vec<Block>,
    pub both: Vec<Block>,
    pub right_only: Vec<Block>,
    pub status: DiffStatus,
}

/// Compare two block collections.
///
/// `None` means the caller never supplied that side, which is an error;
/// an empty slice is a valid, empty collection.
///
/// # Errors
/// * `MissingInput` if either side is `None`
///
/// # Examples
/// ```
/// use subnet_algebra::models::Block;
/// use subnet_algebra::processing::{diff, DiffStatus};
///
/// let left: Vec<Block> = vec!["10.0.0.0/8".parse().unwrap()];
/// let right: Vec<Block> = vec!["10.0.0.0/9".parse().unwrap()];
/// let result = diff(Some(left.as_slice()), Some(right.as_slice())).unwrap();
/// assert_eq!(result.status, DiffStatus::RightSubsumedByLeft);
/// assert_eq!(result.left_only, vec!["10.128.0.0/9".parse::<Block>().unwrap()]);
/// ```
pub fn diff(left: Option<&[Block]>, right: Option<&[Block]>) -> Result<DiffResult, CidrError> {
    let (Some(left), Some(right)) = (left, right) else {
        log::warn!(
            "diff() called with unset input: left set={}, right set={}",
            left.is_some(),
            right.is_some()
        );
        return Err(CidrError::MissingInput("diff"));
    };
    log::debug!(
        "diff() left {} blocks, right {} blocks",
        left.len(),
        right.len()
    );

    let result = match (left.is_empty(), right.is_empty()) {
        (true, true) => DiffResult {
            left_only: Vec::new(),
            both: Vec::new(),
            right_only: Vec::new(),
            status: DiffStatus::BothEmpty,
        },
        (true, false) => DiffResult {
            left_only: Vec::new(),
            both: Vec::new(),
            right_only: merge(right),
            status: DiffStatus::RightOnly,
        },
        (false, true) => DiffResult {
            left_only: merge(left),
            both: Vec::new(),
            right_only: Vec::new(),
            status: DiffStatus::LeftOnly,
        },
        (false, false) => {
            let left_only = remove(left, right);
            let right_only = remove(right, left);
            let both = subset(left, right);
            let status = classify(&left_only, &both, &right_only);
            DiffResult {
                left_only,
                both,
                right_only,
                status,
            }
        }
    };

    log::debug!(
        "diff() -> {status}: {l} left only, {b} both, {r} right only",
        status = result.status,
        l = result.left_only.len(),
        b = result.both.len(),
        r = result.right_only.len()
    );
    Ok(result)
}

/// Status of two non-empty inputs from their three partitions.
fn classify(left_only: &[Block], both: &[Block], right_only: &[Block]) -> DiffStatus {
    if both.is_empty() {
        DiffStatus::NoOverlap
    } else if left_only.is_empty() && right_only.is_empty() {
        DiffStatus::Identical
    } else if left_only.is_empty() {
        DiffStatus::LeftSubsumedByRight
    } else if right_only.is_empty() {
        DiffStatus::RightSubsumedByLeft
    } else {
        DiffStatus::PartialOverlap
    }
}
