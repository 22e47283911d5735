//! Error types for the Bazaar matchmaking engine.
//!
//! All errors use the `BZ_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Posting errors
//! - 2xx: Quantification errors
//! - 3xx: Solver errors
//! - 9xx: General / internal errors
//!
//! Every variant is a precondition violation: the call that returns it has
//! stored nothing and delivered nothing.

use thiserror::Error;

use crate::ResourceKind;

/// Which side of the bipartite graph an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Request,
    Offer,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request => write!(f, "request"),
            Self::Offer => write!(f, "offer"),
        }
    }
}

/// Central error enum for all Bazaar operations.
#[derive(Debug, Error)]
pub enum BazaarError {
    // =================================================================
    // Posting Errors (1xx)
    // =================================================================
    /// A post was made without a participant to route confirmations to.
    #[error("BZ_ERR_100: Post has no participant (nil handle)")]
    NilParticipant,

    /// The request violates `0 < minimum <= desired`.
    #[error("BZ_ERR_101: Invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// The matchmaker is bound to a different resource pool.
    #[error("BZ_ERR_102: Wrong resource: pool trades {expected}, got {actual}")]
    WrongResource {
        expected: ResourceKind,
        actual: ResourceKind,
    },

    /// The round already holds the configured maximum of posts on this side.
    #[error("BZ_ERR_103: Round full: {side} list holds {limit} posts")]
    RoundFull { side: Side, limit: usize },

    // =================================================================
    // Quantification Errors (2xx)
    // =================================================================
    /// A quantifier returned a score above the maximum quality.
    #[error("BZ_ERR_200: Quality out of range: {value} (max 10)")]
    QualityOutOfRange { value: u8 },

    // =================================================================
    // Solver Errors (3xx)
    // =================================================================
    /// An edge referenced a vertex the graph does not have.
    #[error("BZ_ERR_300: Vertex out of range: {side} index {index}, graph has {bound}")]
    VertexOutOfRange {
        side: Side,
        index: usize,
        bound: usize,
    },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("BZ_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, missing fields, etc.).
    #[error("BZ_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error.
    #[error("BZ_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, BazaarError>;

impl From<std::io::Error> for BazaarError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BazaarError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
