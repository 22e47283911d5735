//! Edges and matchings of the request/offer bipartite graph.

use serde::{Deserialize, Serialize};

/// A weighted edge between request vertex `request` and offer vertex
/// `offer`. Weights are always in `1..=10`; incompatible pairs have no edge.
///
/// Edges order by `(request, offer, weight)`, which is the canonical order of
/// a [`Matching`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Edge {
    pub request: usize,
    pub offer: usize,
    pub weight: u8,
}

impl Edge {
    #[must_use]
    pub fn new(request: usize, offer: usize, weight: u8) -> Self {
        Self {
            request,
            offer,
            weight,
        }
    }
}

/// A set of edges in which no request index and no offer index repeats.
///
/// Edges are kept sorted by request index so equal matchings compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matching {
    edges: Vec<Edge>,
}

impl Matching {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary-order edges. The caller guarantees that no
    /// vertex repeats; debug builds check it.
    #[must_use]
    pub fn from_edges(mut edges: Vec<Edge>) -> Self {
        edges.sort_unstable();
        debug_assert!(
            edges.windows(2).all(|w| w[0].request != w[1].request),
            "request vertex used twice"
        );
        debug_assert!(
            {
                let mut offers: Vec<usize> = edges.iter().map(|e| e.offer).collect();
                offers.sort_unstable();
                offers.windows(2).all(|w| w[0] != w[1])
            },
            "offer vertex used twice"
        );
        Self { edges }
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of the included edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| u64::from(e.weight)).sum()
    }

    /// The offer matched to `request`, if any.
    #[must_use]
    pub fn offer_for(&self, request: usize) -> Option<usize> {
        self.edges
            .binary_search_by_key(&request, |e| e.request)
            .ok()
            .map(|i| self.edges[i].offer)
    }

    /// The request matched to `offer`, if any.
    #[must_use]
    pub fn request_for(&self, offer: usize) -> Option<usize> {
        self.edges
            .iter()
            .find(|e| e.offer == offer)
            .map(|e| e.request)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a Matching {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
