//! Error taxonomy for block set operations.

use crate::models::AddressFamily;
use thiserror::Error;

/// Errors raised while building blocks or running set operations on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid prefix /{prefix_len} for {address}: {reason}")]
    InvalidPrefix {
        address: String,
        prefix_len: u32,
        reason: &'static str,
    },

    #[error("Address family mismatch: {left} vs {right}")]
    AddressFamilyMismatch {
        left: AddressFamily,
        right: AddressFamily,
    },

    #[error("Invalid range: {lo} is above {hi}")]
    InvalidRange { lo: String, hi: String },

    #[error("Missing input data in {0}")]
    MissingInput(&'static str),

    #[error("{stage}: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: Box<CidrError>,
    },
}

impl CidrError {
    /// Wrap this error with the name of the stage that raised it.
    pub fn in_stage(self, stage: &'static str) -> CidrError {
        CidrError::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// The underlying error with all stage context stripped.
    pub fn root(&self) -> &CidrError {
        let mut err = self;
        while let CidrError::Stage { source, .. } = err {
            err = source;
        }
        err
    }
}
