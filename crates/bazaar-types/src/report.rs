//! Round outcome produced by the matchmaker.
//!
//! A [`RoundReport`] is returned by every successful `match_round` call. It
//! carries only identities and scores; the matched items themselves were
//! handed to the participants through their confirmation callbacks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ParticipantId, Quality, RoundId};

/// One confirmed request/offer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub request_source: ParticipantId,
    pub offer_source: ParticipantId,
    pub quality: Quality,
}

/// Summary of a completed round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    /// The round that was matched.
    pub round: RoundId,
    /// Confirmed pairs, in request posting order.
    pub pairings: Vec<Pairing>,
    /// Number of requests posted this round.
    pub requests_posted: usize,
    /// Number of offers posted this round.
    pub offers_posted: usize,
    /// Sum of pairing qualities.
    pub total_quality: u64,
    /// Confirmations that could not be routed because the directory no
    /// longer knew the participant.
    pub undelivered: usize,
    /// SHA-256 root over the solver's matching.
    pub matching_root: [u8; 32],
    /// When matching finished.
    pub completed_at: DateTime<Utc>,
}

impl RoundReport {
    #[must_use]
    pub fn matched(&self) -> usize {
        self.pairings.len()
    }

    #[must_use]
    pub fn unmatched_requests(&self) -> usize {
        self.requests_posted - self.pairings.len()
    }

    #[must_use]
    pub fn unmatched_offers(&self) -> usize {
        self.offers_posted - self.pairings.len()
    }

    /// The offer source paired with `request_source`, if any.
    #[must_use]
    pub fn counterpart_of_request(&self, request_source: ParticipantId) -> Option<ParticipantId> {
        self.pairings
            .iter()
            .find(|p| p.request_source == request_source)
            .map(|p| p.offer_source)
    }
}
