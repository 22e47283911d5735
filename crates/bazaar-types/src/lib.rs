//! # bazaar-types
//!
//! Shared types, errors, and configuration for the **Bazaar** matchmaking engine.
//!
//! This crate is the leaf dependency of the workspace -- every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`], [`RoundId`]
//! - **Resource model**: [`ResourceKind`], [`Offer`], [`Request`], [`Posted`]
//! - **Quantification**: [`Quality`], [`Quantifier`], [`StandardQuantifier`]
//! - **Matching model**: [`Edge`], [`Matching`]
//! - **Round output**: [`RoundReport`], [`Pairing`]
//! - **Configuration**: [`MatchmakerConfig`]
//! - **Errors**: [`BazaarError`] with `BZ_ERR_` prefix codes
//! - **Constants**: quality bounds and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod matching;
pub mod offer;
pub mod quality;
pub mod report;
pub mod request;
pub mod resource;

// Re-export all primary types at crate root for ergonomic imports:
//   use bazaar_types::{Offer, Request, Matching, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use matching::*;
pub use offer::*;
pub use quality::*;
pub use report::*;
pub use request::*;
pub use resource::*;

// Constants are accessed via `bazaar_types::constants::FOO`
// (not re-exported to avoid name collisions).
