//! Local and global reaching centrality for unweighted directed graphs.

use crate::closeness::bfs_distances;

/// Share of the other vertices each vertex can reach over outgoing paths.
pub(crate) fn local_reaching(successors: &[Vec<usize>]) -> Vec<f64> {
    let num_nodes = successors.len();

    if num_nodes < 2 {
        return vec![0.0; num_nodes];
    }

    (0..num_nodes)
        .map(|index| {
            let reachable = bfs_distances(index, successors)
                .into_iter()
                .filter(Option::is_some)
                .count();

            (reachable - 1) as f64 / (num_nodes - 1) as f64
        })
        .collect()
}

/// Mean shortfall of every vertex's local reaching centrality from the maximum. `0.0` when all
/// vertices reach equally far, `1.0` for a hub reaching every other vertex.
pub(crate) fn global_reaching(local: &[f64]) -> f64 {
    if local.len() < 2 {
        return 0.0;
    }

    let max = local.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    local.iter().map(|c| max - c).sum::<f64>() / (local.len() - 1) as f64
}
