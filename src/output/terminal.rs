//! Terminal output utilities.

use crate::processing::DiffStatus;
use colored::{ColoredString, Colorize};

/// Quote `value` and right-align it to at least `width` characters.
///
/// Values wider than `width` are never truncated.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    format!("{:>width$}", format!("\"{}\"", value.to_string()))
}

/// Status text coloured by how far apart the two inputs are.
pub fn status_label(status: DiffStatus) -> ColoredString {
    let text = status.to_string();
    match status {
        DiffStatus::Identical | DiffStatus::BothEmpty => text.green(),
        DiffStatus::LeftSubsumedByRight | DiffStatus::RightSubsumedByLeft => text.yellow(),
        DiffStatus::PartialOverlap => text.on_yellow(),
        DiffStatus::NoOverlap | DiffStatus::LeftOnly | DiffStatus::RightOnly => text.on_red(),
    }
}
