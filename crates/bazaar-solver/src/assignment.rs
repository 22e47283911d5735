//! Dense minimum-cost assignment (Kuhn-Munkres).
//!
//! Rows are added one at a time; each addition grows a shortest augmenting
//! path over reduced costs `cost - u[row] - v[col]` while keeping the
//! potentials feasible, then flips the path. O(n^3) for an `n x n` table.

/// Solve the square assignment problem for `cost` (row-major, `n x n`).
///
/// Returns `assignment[row] = col`. Pure: the same table always yields the
/// same assignment.
pub(crate) fn solve_min_cost(cost: &[Vec<i64>]) -> Vec<usize> {
    let n = cost.len();
    if n == 0 {
        return Vec::new();
    }

    // 1-based: column 0 is the virtual source of each augmenting search.
    let mut row_potential = vec![0i64; n + 1];
    let mut col_potential = vec![0i64; n + 1];
    // owner[col] = row currently assigned to col (0 = free)
    let mut owner = vec![0usize; n + 1];
    // way[col] = previous column on the shortest path to col
    let mut way = vec![0usize; n + 1];

    for row in 1..=n {
        owner[0] = row;
        let mut col0 = 0usize;
        let mut min_reduced = vec![i64::MAX; n + 1];
        let mut visited = vec![false; n + 1];

        loop {
            visited[col0] = true;
            let row0 = owner[col0];
            let mut delta = i64::MAX;
            let mut col1 = 0usize;

            for col in 1..=n {
                if visited[col] {
                    continue;
                }
                let reduced = cost[row0 - 1][col - 1] - row_potential[row0] - col_potential[col];
                if reduced < min_reduced[col] {
                    min_reduced[col] = reduced;
                    way[col] = col0;
                }
                // strict `<` keeps the lowest column index on ties
                if min_reduced[col] < delta {
                    delta = min_reduced[col];
                    col1 = col;
                }
            }

            for col in 0..=n {
                if visited[col] {
                    row_potential[owner[col]] += delta;
                    col_potential[col] -= delta;
                } else {
                    min_reduced[col] -= delta;
                }
            }

            col0 = col1;
            if owner[col0] == 0 {
                break;
            }
        }

        // Flip the augmenting path back to the source.
        loop {
            let prev = way[col0];
            owner[col0] = owner[prev];
            col0 = prev;
            if col0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    for col in 1..=n {
        if owner[col] != 0 {
            assignment[owner[col] - 1] = col - 1;
        }
    }
    assignment
}
