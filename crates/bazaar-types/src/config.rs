//! Configuration types for matchmakers.

use serde::{Deserialize, Serialize};

use crate::{ResourceKind, constants};

/// Per-matchmaker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchmakerConfig {
    /// Restrict the pool to one resource kind. `None` accepts any kind and
    /// leaves compatibility entirely to the quantifier.
    pub resource: Option<ResourceKind>,
    /// Maximum number of posts accepted per side in one round.
    pub max_posts_per_round: usize,
}

impl Default for MatchmakerConfig {
    fn default() -> Self {
        Self {
            resource: None,
            max_posts_per_round: constants::MAX_POSTS_PER_ROUND,
        }
    }
}

impl MatchmakerConfig {
    /// A pool that only trades `kind`.
    #[must_use]
    pub fn for_resource(kind: ResourceKind) -> Self {
        Self {
            resource: Some(kind),
            ..Self::default()
        }
    }
}
