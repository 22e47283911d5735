//! # bazaar-broker
//!
//! **Round-based matchmaking between anonymous offers and requests.**
//!
//! Entities never talk to each other. During a round they post offers and
//! requests to a [`Matchmaker`]; at the round boundary the matchmaker
//! quantifies every request against every offer, solves for the best
//! matching, and tells each matched participant who its counterpart is.
//!
//! ## Round Flow
//!
//! ```text
//! post_offer / post_request → RoundBuffer
//!     → match_round() → Quantifier → BipartiteGraph::find_best_matching()
//!     → Participant::confirm_matchmaking_{request,offer} → buffers cleared
//! ```
//!
//! Nothing survives a round: unmatched participants re-post if they are
//! still interested.

pub mod matchmaker;
pub mod participant;
pub mod round_buffer;

pub use matchmaker::Matchmaker;
pub use participant::{Participant, ParticipantDirectory};
pub use round_buffer::RoundBuffer;
