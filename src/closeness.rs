//! A module for computing closeness centrality over adjacency lists.

use std::collections::VecDeque;

/// Breadth-first hop counts from `index` following `lists`, `None` for unreachable vertices.
pub(crate) fn bfs_distances(index: usize, lists: &[Vec<usize>]) -> Vec<Option<usize>> {
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut deltas: Vec<Option<usize>> = vec![None; lists.len()];

    deltas[index] = Some(0);
    queue.push_back(index);

    while let Some(current) = queue.pop_front() {
        let delta = deltas[current].unwrap_or_default();
        for &next in &lists[current] {
            if deltas[next].is_none() {
                deltas[next] = Some(delta + 1);
                queue.push_back(next);
            }
        }
    }

    deltas
}

/// Closeness of every vertex, measured over incoming paths, and scaled by the share of the graph
/// that can reach it (Wasserman and Faust).
///
/// `predecessors[v]` lists the vertices with an edge into `v`. A vertex nothing can reach
/// scores `0.0`.
pub(crate) fn compute_closeness(predecessors: &[Vec<usize>]) -> Vec<f64> {
    let num_nodes = predecessors.len();

    if num_nodes < 2 {
        return vec![0.0; num_nodes];
    }

    (0..num_nodes)
        .map(|index| {
            let reached: Vec<usize> = bfs_distances(index, predecessors)
                .into_iter()
                .flatten()
                .collect();

            let total_path_length: usize = reached.iter().sum();
            if total_path_length == 0 {
                return 0.0;
            }

            // The vertex itself is part of `reached` with a distance of 0.
            let others = (reached.len() - 1) as f64;
            (others / total_path_length as f64) * (others / (num_nodes - 1) as f64)
        })
        .collect()
}
