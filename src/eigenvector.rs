//! Eigenvector centrality via power iteration.
//!
//! Scores flow along edge direction: a vertex is important when important vertices point to it.
//! Iterating on `Aᵀ + I` rather than `Aᵀ` keeps the shifted spectrum positive, so bipartite
//! structures like two-cycles don't oscillate. Graphs whose dominant eigenvalue is degenerate
//! (DAGs and many disconnected graphs) converge too slowly or not at all, which surfaces as
//! [`NetworkError::NotConverged`] rather than partial scores.

use nalgebra::{DMatrix, DVector};
use tracing::{debug, instrument, warn};

use crate::{
    config::EigenvectorConfig,
    error::{NetworkError, Result},
};

/// Computes the centrality of each vertex, in adjacency matrix order, normalised to unit L2 norm.
#[instrument(skip(adjacency_matrix), fields(n = adjacency_matrix.nrows()))]
pub(crate) fn compute_eigenvector(
    adjacency_matrix: &DMatrix<f64>,
    config: &EigenvectorConfig,
) -> Result<Vec<f64>> {
    let n = adjacency_matrix.nrows();

    // Early return if the matrix is empty, the rest of the computation requires a matrix with at
    // least a dim of 1x1.
    if n == 0 {
        return Ok(vec![]);
    }

    let shifted = adjacency_matrix.transpose() + DMatrix::<f64>::identity(n, n);
    let mut scores = DVector::<f64>::from_element(n, 1.0 / n as f64);

    for iteration in 1..=config.max_iter {
        let mut next = &shifted * &scores;

        let norm = next.norm();
        if norm > 0.0 {
            next.unscale_mut(norm);
        }

        let delta = (&next - &scores).lp_norm(1);
        scores = next;

        if delta < n as f64 * config.tolerance {
            debug!(iteration, "eigenvector centrality converged");
            return Ok(scores.iter().copied().collect());
        }
    }

    warn!(
        max_iter = config.max_iter,
        "eigenvector centrality did not converge"
    );

    Err(NetworkError::NotConverged {
        iterations: config.max_iter,
    })
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;

    const FRAC_1_SQRT_3: f64 = 0.5773502691896258;

    #[test]
    fn empty() {
        let scores = compute_eigenvector(&dmatrix![], &EigenvectorConfig::default()).unwrap();

        assert!(scores.is_empty());
    }

    #[test]
    fn cycle_is_uniform() {
        let adjacency_matrix = dmatrix![0.0, 1.0, 0.0;
                                        0.0, 0.0, 1.0;
                                        1.0, 0.0, 0.0];
        let scores =
            compute_eigenvector(&adjacency_matrix, &EigenvectorConfig::default()).unwrap();

        for score in scores {
            assert!((score - FRAC_1_SQRT_3).abs() < 1e-9);
        }
    }

    #[test]
    fn two_cycle_does_not_oscillate() {
        let adjacency_matrix = dmatrix![0.0, 1.0;
                                        1.0, 0.0];
        let scores =
            compute_eigenvector(&adjacency_matrix, &EigenvectorConfig::default()).unwrap();

        assert!((scores[0] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
        assert!((scores[1] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn pointed_to_vertex_wins() {
        // 0 <-> 1, 2 -> 1: vertex 1 has two in-edges.
        let adjacency_matrix = dmatrix![0.0, 1.0, 0.0;
                                        1.0, 0.0, 0.0;
                                        0.0, 1.0, 0.0];
        let config = EigenvectorConfig {
            max_iter: 1000,
            ..Default::default()
        };
        let scores = compute_eigenvector(&adjacency_matrix, &config).unwrap();

        assert!(scores[1] > scores[0]);
        assert!(scores[0] > scores[2]);
    }

    #[test]
    fn star_does_not_converge() {
        // 0 -> 1, 0 -> 2: the hub's score decays towards zero too slowly.
        let adjacency_matrix = dmatrix![0.0, 1.0, 1.0;
                                        0.0, 0.0, 0.0;
                                        0.0, 0.0, 0.0];

        assert!(matches!(
            compute_eigenvector(&adjacency_matrix, &EigenvectorConfig::default()),
            Err(NetworkError::NotConverged { iterations: 100 })
        ));
    }

    #[test]
    fn zero_iterations() {
        let config = EigenvectorConfig {
            max_iter: 0,
            ..Default::default()
        };

        assert!(matches!(
            compute_eigenvector(&dmatrix![0.0], &config),
            Err(NetworkError::NotConverged { iterations: 0 })
        ));
    }
}
