//! The closed set of centrality measures a network can be ranked by.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::NetworkError;

/// A centrality measure, used to pick the coloring of a figure.
///
/// # Examples
///
/// ```
/// use costar::centrality::Centrality;
///
/// assert_eq!("globalreach".parse::<Centrality>().unwrap(), Centrality::GlobalReach);
/// assert!("pagerank".parse::<Centrality>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Centrality {
    /// Share of the other vertices a vertex is connected to, in either direction.
    #[default]
    Degree,
    /// Inverse mean distance from the vertices that can reach a vertex.
    Closeness,
    /// Share of the other vertices reachable from a vertex.
    GlobalReach,
    /// Importance inherited from the vertices pointing to a vertex.
    Eigenvector,
}

impl Centrality {
    /// Every measure, in the order they are usually reported.
    pub const ALL: [Centrality; 4] = [
        Centrality::Degree,
        Centrality::Closeness,
        Centrality::GlobalReach,
        Centrality::Eigenvector,
    ];

    /// The canonical name, accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Centrality::Degree => "degree",
            Centrality::Closeness => "closeness",
            Centrality::GlobalReach => "globalreach",
            Centrality::Eigenvector => "eigenvector",
        }
    }
}

impl fmt::Display for Centrality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Centrality {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degree" => Ok(Centrality::Degree),
            "closeness" => Ok(Centrality::Closeness),
            "globalreach" | "global-reach" | "global_reach" => Ok(Centrality::GlobalReach),
            "eigenvector" => Ok(Centrality::Eigenvector),
            _ => Err(NetworkError::UnsupportedRanking(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Centrality {
    type Error = NetworkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for centrality in Centrality::ALL {
            assert_eq!(centrality.name().parse::<Centrality>().unwrap(), centrality);
            assert_eq!(centrality.to_string(), centrality.name());
        }
    }

    #[test]
    fn aliases() {
        assert_eq!(
            "Global-Reach".parse::<Centrality>().unwrap(),
            Centrality::GlobalReach
        );
        assert_eq!(
            " eigenvector ".parse::<Centrality>().unwrap(),
            Centrality::Eigenvector
        );
    }

    #[test]
    fn unsupported() {
        for name in ["", "pagerank", "betweenness", "degrees"] {
            assert!(matches!(
                name.parse::<Centrality>(),
                Err(NetworkError::UnsupportedRanking(rejected)) if rejected == name
            ));
        }
    }

    #[test]
    fn deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            ranking: Centrality,
        }

        let wrapper: Wrapper = toml::from_str("ranking = \"closeness\"").unwrap();
        assert_eq!(wrapper.ranking, Centrality::Closeness);
        assert!(toml::from_str::<Wrapper>("ranking = \"pagerank\"").is_err());
    }
}
