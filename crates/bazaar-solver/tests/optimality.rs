//! Integration tests: optimality, validity and determinism of the solver
//! against exhaustive search on small random graphs.

use std::collections::HashSet;

use bazaar_solver::{BipartiteGraph, compute_matching_root};
use bazaar_types::Matching;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

type Triple = (usize, usize, u8);

fn random_edges(rng: &mut StdRng, requests: usize, offers: usize) -> Vec<Triple> {
    let density = rng.gen_range(0.1..0.9);
    let mut edges = Vec::new();
    for r in 0..requests {
        for o in 0..offers {
            if rng.gen_bool(density) {
                edges.push((r, o, rng.gen_range(1..=10)));
            }
        }
    }
    edges
}

fn build(requests: usize, offers: usize, edges: &[Triple]) -> BipartiteGraph {
    let mut g = BipartiteGraph::new(requests, offers);
    for &(r, o, w) in edges {
        g.add_edge(r, o, w).unwrap();
    }
    g
}

/// Best total over every matching of the graph, by exhaustive recursion.
fn brute_force(g: &BipartiteGraph, request: usize, used: &mut [bool]) -> u64 {
    if request == g.requests() {
        return 0;
    }
    // Leave this request unmatched.
    let mut best = brute_force(g, request + 1, used);
    for offer in 0..g.offers() {
        let w = g.weight(request, offer);
        if w > 0 && !used[offer] {
            used[offer] = true;
            best = best.max(u64::from(w) + brute_force(g, request + 1, used));
            used[offer] = false;
        }
    }
    best
}

fn assert_valid(g: &BipartiteGraph, m: &Matching) {
    let mut requests = HashSet::new();
    let mut offers = HashSet::new();
    for e in m {
        assert!(requests.insert(e.request), "request {} reused", e.request);
        assert!(offers.insert(e.offer), "offer {} reused", e.offer);
        assert!(e.weight > 0);
        assert_eq!(g.weight(e.request, e.offer), e.weight, "edge not in graph");
    }
}

#[test]
fn matches_brute_force_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0xBA2AA2);
    for _ in 0..400 {
        let requests = rng.gen_range(0..=6);
        let offers = rng.gen_range(0..=6);
        let edges = random_edges(&mut rng, requests, offers);
        let g = build(requests, offers, &edges);

        let m = g.find_best_matching();
        assert_valid(&g, &m);

        let mut used = vec![false; offers];
        let best = brute_force(&g, 0, &mut used);
        assert_eq!(m.total_weight(), best, "suboptimal for edges {edges:?}");
    }
}

#[test]
fn insertion_order_does_not_change_result() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let requests = rng.gen_range(1..=6);
        let offers = rng.gen_range(1..=6);
        let mut edges = random_edges(&mut rng, requests, offers);
        // Ties are the interesting case: flatten weights.
        if rng.gen_bool(0.5) {
            for e in &mut edges {
                e.2 = rng.gen_range(1..=2);
            }
        }

        let reference = build(requests, offers, &edges).find_best_matching();
        for _ in 0..5 {
            edges.shuffle(&mut rng);
            let shuffled = build(requests, offers, &edges).find_best_matching();
            assert_eq!(shuffled, reference);
            assert_eq!(
                compute_matching_root(&shuffled),
                compute_matching_root(&reference)
            );
        }
    }
}

#[test]
fn uniform_weights_give_maximum_cardinality() {
    // With equal weights the best matching is a maximum-cardinality one.
    let edges = [(0, 0, 1), (0, 1, 1), (1, 0, 1), (2, 2, 1), (3, 2, 1)];
    let g = build(4, 3, &edges);
    let m = g.find_best_matching();
    assert_valid(&g, &m);
    assert_eq!(m.len(), 3);
}

#[test]
fn larger_graph_stays_valid() {
    // Tens of entities per round is the expected load.
    let mut rng = StdRng::seed_from_u64(42);
    let edges = random_edges(&mut rng, 40, 40);
    let g = build(40, 40, &edges);
    let m = g.find_best_matching();
    assert_valid(&g, &m);
    assert_eq!(m, g.find_best_matching());
}
