//! A module for working with edges.

/// A directed pair of vertices, pointing from `source` to `target`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<T> {
    source: T,
    target: T,
}

impl<T> Edge<T> {
    /// Creates a new edge from two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_ne!(edge, Edge::new("b", "a"));
    /// ```
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    /// Returns the vertex the edge starts from.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.source(), &"a");
    /// ```
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the vertex the edge points to.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.target(), &"b");
    /// ```
    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from((source, target): (T, T)) -> Self {
        Self::new(source, target)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, hash::Hash};

    use super::*;

    #[test]
    fn new() {
        let (source, target) = ("a", "b");

        assert_eq!(Edge::new(source, target), Edge { source, target })
    }

    #[test]
    fn source_and_target() {
        let edge = Edge::new("a", "b");

        assert_eq!(edge.source(), &"a");
        assert_eq!(edge.target(), &"b");
    }

    #[test]
    fn direction_matters() {
        assert_ne!(Edge::new("a", "b"), Edge::new("b", "a"));
    }

    #[test]
    fn from_pair() {
        let edge: Edge<&str> = ("a", "b").into();

        assert_eq!(edge, Edge::new("a", "b"));
    }

    //
    // Trait implementations
    //

    fn dedup<T: Hash + Eq>(edges: Vec<Edge<T>>) -> usize {
        edges.into_iter().collect::<HashSet<_>>().len()
    }

    #[test]
    fn hash_keeps_direction() {
        // Opposite directions are distinct, repeats collapse.
        assert_eq!(
            dedup(vec![
                Edge::new("a", "b"),
                Edge::new("b", "a"),
                Edge::new("a", "b")
            ]),
            2
        );
    }
}
