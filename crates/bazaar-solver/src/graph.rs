//! The request/offer bipartite graph and its best matching.
//!
//! ```text
//! add_edge(request, offer, weight)* -> find_best_matching() -> Matching
//! ```
//!
//! ## Canonical form
//!
//! Edges are stored keyed by `(request, offer)`. A parallel edge keeps the
//! larger weight, which is the only one an optimal matching could use. The
//! stored table is therefore the same for any insertion order of the same
//! edge multiset, and so is the result.
//!
//! ## Algorithm
//!
//! Only vertices that touch an edge take part. They are compacted into a
//! square `k x k` table with `cost = max_weight - weight`, where a missing
//! edge has weight 0. A minimum-cost assignment over that table is a
//! maximum-weight assignment; dropping its zero-weight cells leaves a
//! maximum-weight matching of the sparse graph.

use std::collections::BTreeMap;

use bazaar_types::{BazaarError, Edge, Matching, Result, Side};

use crate::assignment::solve_min_cost;

/// Sparse bipartite graph between `requests` and `offers` vertices.
#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    requests: usize,
    offers: usize,
    /// `(request, offer) -> weight`, weights always `> 0`.
    weights: BTreeMap<(usize, usize), u8>,
}

impl BipartiteGraph {
    /// Create a graph with no edges.
    #[must_use]
    pub fn new(requests: usize, offers: usize) -> Self {
        Self {
            requests,
            offers,
            weights: BTreeMap::new(),
        }
    }

    /// Number of request vertices.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Number of offer vertices.
    #[must_use]
    pub fn offers(&self) -> usize {
        self.offers
    }

    /// Number of distinct stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Add a weighted edge.
    ///
    /// A zero weight means "incompatible" and is ignored. Indices outside the
    /// graph are rejected and leave it untouched.
    ///
    /// # Errors
    /// Returns [`BazaarError::VertexOutOfRange`] for a bad index.
    pub fn add_edge(&mut self, request: usize, offer: usize, weight: u8) -> Result<()> {
        if request >= self.requests {
            return Err(BazaarError::VertexOutOfRange {
                side: Side::Request,
                index: request,
                bound: self.requests,
            });
        }
        if offer >= self.offers {
            return Err(BazaarError::VertexOutOfRange {
                side: Side::Offer,
                index: offer,
                bound: self.offers,
            });
        }
        if weight == 0 {
            return Ok(());
        }

        self.weights
            .entry((request, offer))
            .and_modify(|w| *w = (*w).max(weight))
            .or_insert(weight);
        Ok(())
    }

    /// Stored weight of `(request, offer)`, 0 if there is no edge.
    #[must_use]
    pub fn weight(&self, request: usize, offer: usize) -> u8 {
        self.weights.get(&(request, offer)).copied().unwrap_or(0)
    }

    /// The stored edges in canonical `(request, offer)` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.weights
            .iter()
            .map(|(&(request, offer), &weight)| Edge::new(request, offer, weight))
    }

    /// Compute a matching of maximum total weight.
    ///
    /// Never fails: an empty graph yields an empty matching. Every returned
    /// edge was added with a positive weight.
    #[must_use]
    pub fn find_best_matching(&self) -> Matching {
        let Some(&max_weight) = self.weights.values().max() else {
            return Matching::new();
        };

        // Compact to the vertices that touch an edge, in index order.
        let mut rows: Vec<usize> = self.weights.keys().map(|&(r, _)| r).collect();
        rows.dedup();
        let mut cols: Vec<usize> = self.weights.keys().map(|&(_, o)| o).collect();
        cols.sort_unstable();
        cols.dedup();

        let size = rows.len().max(cols.len());
        let max_weight = i64::from(max_weight);
        let mut cost = vec![vec![max_weight; size]; size];
        for (i, &request) in rows.iter().enumerate() {
            for (j, &offer) in cols.iter().enumerate() {
                cost[i][j] = max_weight - i64::from(self.weight(request, offer));
            }
        }

        let assignment = solve_min_cost(&cost);

        let edges: Vec<Edge> = assignment
            .iter()
            .enumerate()
            .filter(|&(i, &j)| i < rows.len() && j < cols.len())
            .map(|(i, &j)| (rows[i], cols[j]))
            .filter_map(|(request, offer)| {
                let weight = self.weight(request, offer);
                (weight > 0).then(|| Edge::new(request, offer, weight))
            })
            .collect();

        let matching = Matching::from_edges(edges);
        tracing::trace!(
            requests = self.requests,
            offers = self.offers,
            edges = self.weights.len(),
            matched = matching.len(),
            total = matching.total_weight(),
            "Best matching found"
        );
        matching
    }
}
