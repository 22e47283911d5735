//! Resource kinds traded through the matchmaker.

use serde::{Deserialize, Serialize};

/// The kind of resource an offer supplies or a request wants.
///
/// Offers and requests only ever match within the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Living space: houses request it, walkers and spawners offer it.
    Occupancy,
    Labor,
    Goods,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Occupancy => write!(f, "OCCUPANCY"),
            Self::Labor => write!(f, "LABOR"),
            Self::Goods => write!(f, "GOODS"),
        }
    }
}
