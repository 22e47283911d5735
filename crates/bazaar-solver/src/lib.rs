//! # bazaar-solver
//!
//! **Maximum-weight bipartite matching for the Bazaar broker.**
//!
//! The solver knows nothing about offers, requests or participants. It takes
//! `m` request vertices, `n` offer vertices and a sparse set of positive
//! integer-weighted edges, and returns a matching of maximum total weight in
//! which vertices may stay unmatched.
//!
//! - **Optimal**: Hungarian method with vertex potentials, never greedy
//! - **Deterministic**: the result depends only on the edge multiset, not on
//!   insertion order
//! - **Verifiable**: [`compute_matching_root`] fingerprints a matching

mod assignment;
pub mod determinism;
pub mod graph;

pub use determinism::{compute_matching_root, verify_matching_root};
pub use graph::BipartiteGraph;
