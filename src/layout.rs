//! Node placement for the figure.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::config::LayoutConfig;

/// A point in the unit square.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Places `n` nodes uniformly at random in `[0, 1) x [0, 1)`, in index order.
///
/// A seeded config always produces the same positions.
///
/// # Examples
///
/// ```
/// use costar::config::LayoutConfig;
/// use costar::layout::random_layout;
///
/// let config = LayoutConfig { seed: Some(42) };
/// assert_eq!(random_layout(3, &config), random_layout(3, &config));
/// ```
pub fn random_layout(n: usize, config: &LayoutConfig) -> Vec<Position> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..n)
        .map(|_| Position {
            x: rng.gen(),
            y: rng.gen(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square() {
        let positions = random_layout(500, &LayoutConfig::default());

        assert_eq!(positions.len(), 500);
        assert!(positions
            .iter()
            .all(|p| (0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y)));
    }

    #[test]
    fn seeds_differ() {
        let a = random_layout(4, &LayoutConfig { seed: Some(1) });
        let b = random_layout(4, &LayoutConfig { seed: Some(2) });

        assert_ne!(a, b);
    }

    #[test]
    fn empty() {
        assert!(random_layout(0, &LayoutConfig { seed: Some(1) }).is_empty());
    }
}
