//! Block list files.
//!
//! Two formats are accepted:
//! - a JSON array of CIDR strings, e.g. `["10.0.0.0/8", "fd00::/8"]`
//! - plain text with CIDRs separated by whitespace, commas or semicolons;
//!   anything after `#` on a line is a comment

use crate::error::CidrError;
use crate::models::Block;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors while loading a block list.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing JSON at {location}: {message}")]
    Json { location: String, message: String },

    #[error("Line {line}: {token}: {source}")]
    Cidr {
        line: usize,
        token: String,
        #[source]
        source: CidrError,
    },
}

/// Tokens between separators, ignoring `#` comments.
static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(r"[^\s,;#]+").expect("Invalid Regex"))
}

/// Read a block list from `path`, picking the format from the content.
pub fn read_block_list(path: &Path) -> Result<Vec<Block>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Reading block list from {}", path.display());

    let blocks = if text.trim_start().starts_with('[') {
        parse_block_json(&text)?
    } else {
        parse_block_text(&text)?
    };
    log::info!("Read {} blocks from {}", blocks.len(), path.display());
    Ok(blocks)
}

/// Parse a JSON array of CIDR strings.
pub fn parse_block_json(json: &str) -> Result<Vec<Block>, InputError> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(deserializer).map_err(|e| InputError::Json {
        location: e.path().to_string(),
        message: e.inner().to_string(),
    })
}

/// Parse plain text with one or more CIDRs per line.
pub fn parse_block_text(text: &str) -> Result<Vec<Block>, InputError> {
    let mut blocks = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default();
        for token in get_token_regex().find_iter(content) {
            let token = token.as_str();
            let block = token.parse::<Block>().map_err(|source| InputError::Cidr {
                line: i + 1,
                token: token.to_string(),
                source,
            })?;
            log::trace!("line {}: {block}", i + 1);
            blocks.push(block);
        }
    }
    Ok(blocks)
}
