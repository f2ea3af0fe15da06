//! CSV output for diff results.

use super::terminal::{format_field, status_label};
use crate::models::Block;
use crate::processing::DiffResult;
use std::error::Error;

/// Which partition of a diff a block belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    Left,
    Both,
    Right,
}

impl Side {
    fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Both => "both",
            Side::Right => "right",
        }
    }
}

/// One output row: a block and the partition it came from.
#[derive(Debug, PartialEq)]
pub struct DiffRow {
    /// Row number, starting at 1.
    pub row: usize,
    pub side: Side,
    pub block: Block,
}

/// All blocks of a diff in address order, tagged with their side.
///
/// The three partitions are disjoint, so the order is total.
pub fn diff_rows(result: &DiffResult) -> Vec<DiffRow> {
    let tagged = |side: Side, blocks: &[Block]| {
        blocks
            .iter()
            .map(move |block| (side, *block))
            .collect::<Vec<_>>()
    };
    let mut rows: Vec<(Side, Block)> = tagged(Side::Left, &result.left_only);
    rows.extend(tagged(Side::Both, &result.both));
    rows.extend(tagged(Side::Right, &result.right_only));
    rows.sort_by_key(|(_, block)| *block);

    rows.into_iter()
        .enumerate()
        .map(|(i, (side, block))| DiffRow {
            row: i + 1,
            side,
            block,
        })
        .collect()
}

/// Format a single CSV row.
fn format_csv_row(row: &DiffRow) -> String {
    format!(
        "{row},{side},{cidr},{first},{last},{size}",
        row = format_field(row.row, 6),
        side = format_field(row.side.label(), 7),
        cidr = format_field(row.block, 22),
        first = format_field(row.block.first(), 18),
        last = format_field(row.block.last(), 18),
        size = format_field(format!("2^{}", row.block.size_log2()), 8),
    )
}

/// Print a diff result as CSV to stdout, with the status on stderr.
pub fn print_diff_csv(result: &DiffResult) {
    log::info!("#Start print_diff_csv()");
    println!(r#" "cnt",  "side",               "cidr",            "first",             "last",   "size""#);
    for row in diff_rows(result) {
        println!("{}", format_csv_row(&row));
    }
    eprintln!("#status# {}", status_label(result.status));
}

/// Print a diff result as pretty JSON to stdout.
pub fn print_diff_json(result: &DiffResult) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    println!("{json}");
    Ok(())
}
