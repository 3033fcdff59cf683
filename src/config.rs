//! Tunables for building and rendering a network.
//!
//! Every section implements `Default`, so a config file only needs to name the values it
//! overrides:
//!
//! ```
//! use costar::config::NetworkConfig;
//!
//! let config = NetworkConfig::from_toml_str(
//!     r#"
//!     [layout]
//!     seed = 7
//!
//!     [eigenvector]
//!     max_iter = 500
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.layout.seed, Some(7));
//! assert_eq!(config.eigenvector.max_iter, 500);
//! assert_eq!(config.eigenvector.tolerance, 1e-6);
//! ```

use serde::Deserialize;

use crate::{centrality::Centrality, error::Result};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub layout: LayoutConfig,
    pub eigenvector: EigenvectorConfig,
    pub figure: FigureConfig,
}

impl NetworkConfig {
    /// Parses a config from TOML, missing keys fall back to their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

/// Placement of the nodes in the figure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Seed for the random layout. `None` draws a fresh layout on every construction.
    pub seed: Option<u64>,
}

/// Power iteration parameters for eigenvector centrality.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EigenvectorConfig {
    /// Maximum number of iterations.
    /// Default: 100.
    pub max_iter: usize,
    /// Convergence threshold, checked against the L1 change per node.
    /// Default: 1e-6.
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tolerance: 1e-6,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub title: String,
    /// The measure [`Network::figure`](crate::graph::Network::figure) colors nodes by.
    /// Default: degree.
    pub ranking: Centrality,
    /// Any named Plotly colorscale, e.g. `YlGnBu`, `Viridis` or `Hot`.
    pub colorscale: String,
    pub marker_size: f64,
    /// Footnote pinned to the bottom left corner, may contain HTML links.
    pub credit: Option<String>,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            title: "<br>Character Network".to_owned(),
            ranking: Centrality::default(),
            colorscale: "YlGnBu".to_owned(),
            marker_size: 10.0,
            credit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_default() {
        assert_eq!(
            NetworkConfig::from_toml_str("").unwrap(),
            NetworkConfig::default()
        );
    }

    #[test]
    fn figure_overrides() {
        let config = NetworkConfig::from_toml_str(
            r#"
            [figure]
            title = "Avengers"
            colorscale = "Viridis"
            "#,
        )
        .unwrap();

        assert_eq!(config.figure.title, "Avengers");
        assert_eq!(config.figure.colorscale, "Viridis");
        assert_eq!(config.figure.marker_size, 10.0);
        assert_eq!(config.figure.ranking, Centrality::Degree);
        assert_eq!(config.figure.credit, None);
        assert_eq!(config.layout.seed, None);
    }

    #[test]
    fn figure_ranking_and_credit() {
        let config = NetworkConfig::from_toml_str(
            r#"
            [figure]
            ranking = "global-reach"
            credit = "Data: <a href='https://example.org'>example.org</a>"
            "#,
        )
        .unwrap();

        assert_eq!(config.figure.ranking, Centrality::GlobalReach);
        assert!(config.figure.credit.unwrap().starts_with("Data:"));
    }

    #[test]
    fn rejects_unsupported_ranking() {
        let err = NetworkConfig::from_toml_str("[figure]\nranking = \"pagerank\"").unwrap_err();

        assert!(matches!(err, crate::error::NetworkError::Config(_)));
        assert!(err.to_string().contains("pagerank"));
    }

    #[test]
    fn rejects_bad_types() {
        assert!(matches!(
            NetworkConfig::from_toml_str("[eigenvector]\nmax_iter = \"many\""),
            Err(crate::error::NetworkError::Config(_))
        ));
    }
}
