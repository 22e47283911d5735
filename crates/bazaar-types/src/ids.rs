//! Identifiers used throughout Bazaar.
//!
//! Participants are addressed by value-equality handles rather than by
//! reference identity, so a handle can be copied into posts, reports and
//! directories freely.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ParticipantId
// ---------------------------------------------------------------------------

/// Opaque handle of an entity taking part in matchmaking.
///
/// The broker never inspects it; it only routes confirmations with it. The
/// nil UUID stands for "no participant" and is rejected when posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    /// Fresh time-ordered handle (UUIDv7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Handle derived from a counter, for reproducible simulations.
    #[must_use]
    pub fn sequential(n: u64) -> Self {
        Self(Uuid::from_u128(u128::from(n)))
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// The "absent participant" handle.
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RoundId
// ---------------------------------------------------------------------------

/// Monotonically increasing identifier of a matchmaking round.
///
/// Each round runs: post offers/requests → match → clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_id_uniqueness() {
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        assert_ne!(a, b);
        assert!(!a.is_nil());
    }

    #[test]
    fn sequential_ids_are_stable_and_ordered() {
        assert_eq!(ParticipantId::sequential(4), ParticipantId::sequential(4));
        assert!(ParticipantId::sequential(1) < ParticipantId::sequential(2));
        assert!(!ParticipantId::sequential(1).is_nil());
        assert!(ParticipantId::sequential(0).is_nil());
    }

    #[test]
    fn nil_is_nil() {
        assert!(ParticipantId::nil().is_nil());
        assert!(ParticipantId::from_bytes([0; 16]).is_nil());
    }

    #[test]
    fn round_id_next() {
        assert_eq!(RoundId(5).next(), RoundId(6));
        assert_eq!(format!("{}", RoundId(2)), "round:2");
    }

    #[test]
    fn serde_roundtrips() {
        let pid = ParticipantId::new();
        let json = serde_json::to_string(&pid).unwrap();
        let back: ParticipantId = serde_json::from_str(&json).unwrap();
        assert_eq!(pid, back);
    }
}
