//! A module for working with directed relationship networks.

use std::{
    borrow::Borrow,
    collections::{HashMap, HashSet},
    fmt::{Debug, Display},
    hash::Hash,
};

use nalgebra::DMatrix;
use tracing::{debug, instrument};

use crate::{
    centrality::Centrality,
    closeness::compute_closeness,
    config::NetworkConfig,
    edge::Edge,
    eigenvector::compute_eigenvector,
    error::{NetworkError, Result},
    figure::Figure,
    layout::{random_layout, Position},
    reaching::{global_reaching, local_reaching},
    table::EdgeTable,
};

/// A directed graph, made up of edges, along with the structures derived from it.
///
/// Everything is computed once on construction and never changes afterwards: the vertex
/// ordering, the adjacency matrix and the figure layout.
#[derive(Clone, Debug)]
pub struct Network<T> {
    /// The distinct edges, in order of first appearance.
    edges: Vec<Edge<T>>,
    /// The vertices in their canonical order: first appearance when scanning the edges, source
    /// before target. Every index-based structure follows this order.
    vertices: Vec<T>,
    /// A mapping of vertices to their position in `vertices`.
    index: HashMap<T, usize>,
    /// Binary adjacency matrix, `(i, j)` is set for an edge from vertex `i` to vertex `j`.
    adjacency_matrix: DMatrix<f64>,
    /// One position per vertex, shared by every figure.
    positions: Vec<Position>,
    config: NetworkConfig,
}

impl Network<String> {
    /// Builds a network from the rows of an edge table.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::config::NetworkConfig;
    /// use costar::graph::Network;
    /// use costar::table::EdgeTable;
    ///
    /// let table = EdgeTable::from_pairs([("Thor", "Loki"), ("Loki", "Odin"), ("Thor", "Loki")]);
    /// let network = Network::from_table(&table, NetworkConfig::default());
    ///
    /// assert_eq!(network.node_count(), 3);
    /// assert_eq!(network.edge_count(), 2);
    /// ```
    pub fn from_table(table: &EdgeTable, config: NetworkConfig) -> Self {
        Self::from_edges(table.edges(), config)
    }
}

impl<T> Network<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Builds a network from directed edges, repeated edges are collapsed into one.
    #[instrument(skip_all)]
    pub fn from_edges<I>(edges: I, config: NetworkConfig) -> Self
    where
        I: IntoIterator<Item = Edge<T>>,
    {
        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        let mut vertices = Vec::new();
        let mut index = HashMap::new();

        for edge in edges {
            if seen.contains(&edge) {
                continue;
            }

            for vertex in [edge.source(), edge.target()] {
                if !index.contains_key(vertex) {
                    index.insert(vertex.clone(), vertices.len());
                    vertices.push(vertex.clone());
                }
            }

            seen.insert(edge.clone());
            distinct.push(edge);
        }

        let n = vertices.len();
        let mut adjacency_matrix = DMatrix::<f64>::zeros(n, n);
        for edge in &distinct {
            // Both ends were indexed in the loop above.
            let (i, j) = (index[edge.source()], index[edge.target()]);
            adjacency_matrix[(i, j)] = 1.0;
        }

        let positions = random_layout(n, &config.layout);

        debug!(vertices = n, edges = distinct.len(), "built network");

        Self {
            edges: distinct,
            vertices,
            index,
            adjacency_matrix,
            positions,
            config,
        }
    }

    /// Returns the vertex count of the network.
    pub fn node_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the dimension of the adjacency matrix, which is also the vertex count.
    pub fn size(&self) -> usize {
        self.adjacency_matrix.nrows()
    }

    /// Returns the number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertices in canonical order, a vertex's position is its index.
    pub fn nodes(&self) -> &[T] {
        &self.vertices
    }

    /// Returns the distinct edges in order of first appearance.
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// Checks if the network contains an edge.
    pub fn contains(&self, edge: &Edge<T>) -> bool {
        match (self.index.get(edge.source()), self.index.get(edge.target())) {
            (Some(&i), Some(&j)) => self.adjacency_matrix[(i, j)] != 0.0,
            _ => false,
        }
    }

    /// Returns the index of a vertex.
    pub fn index_of<Q>(&self, vertex: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(vertex).copied()
    }

    /// Returns the vertex at an index.
    pub fn label(&self, index: usize) -> Option<&T> {
        self.vertices.get(index)
    }

    /// Returns `(index, vertex)` pairs, consistent with the adjacency matrix ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::config::NetworkConfig;
    /// use costar::edge::Edge;
    /// use costar::graph::Network;
    ///
    /// let network = Network::from_edges([Edge::new("b", "a")], NetworkConfig::default());
    /// assert_eq!(network.names(), vec![(0, &"b"), (1, &"a")]);
    /// ```
    pub fn names(&self) -> Vec<(usize, &T)> {
        self.vertices.iter().enumerate().collect()
    }

    /// Returns the figure position of each vertex, in canonical order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the configuration the network was built with.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Returns the adjacency matrix for this network.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use costar::config::NetworkConfig;
    /// use costar::edge::Edge;
    /// use costar::graph::Network;
    ///
    /// let network = Network::from_edges([Edge::new("a", "b")], NetworkConfig::default());
    /// assert_eq!(
    ///     network.adjacency_matrix(),
    ///     &dmatrix![0.0, 1.0;
    ///               0.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&self) -> &DMatrix<f64> {
        &self.adjacency_matrix
    }

    /// Computes the density of the network, the ratio of edges with respect to the maximum
    /// possible directed edges. Self-loops count as edges.
    pub fn density(&self) -> f64 {
        let vc = self.node_count();
        if vc < 2 {
            return 0.0;
        }

        let vc = vc as f64;
        self.edge_count() as f64 / (vc * (vc - 1.0))
    }

    /// Returns the indices reachable from `index` over exactly one outgoing edge, ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::config::NetworkConfig;
    /// use costar::edge::Edge;
    /// use costar::error::NetworkError;
    /// use costar::graph::Network;
    ///
    /// let network = Network::from_edges(
    ///     [Edge::new("a", "b"), Edge::new("a", "c")],
    ///     NetworkConfig::default(),
    /// );
    ///
    /// assert_eq!(network.neighbors(0).unwrap(), vec![1, 2]);
    /// assert!(matches!(
    ///     network.neighbors(3),
    ///     Err(NetworkError::InvalidIndex { index: 3, size: 3 })
    /// ));
    /// ```
    pub fn neighbors(&self, index: usize) -> Result<Vec<usize>> {
        if index >= self.size() {
            return Err(NetworkError::InvalidIndex {
                index,
                size: self.size(),
            });
        }

        Ok(self
            .adjacency_matrix
            .row(index)
            .iter()
            .enumerate()
            .filter(|(_, &val)| val != 0.0)
            .map(|(j, _)| j)
            .collect())
    }

    /// Label-based [`Network::neighbors`]: the vertices `vertex` has an edge to.
    pub fn neighbor_labels<Q>(&self, vertex: &Q) -> Result<Vec<&T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let index = self
            .index_of(vertex)
            .ok_or_else(|| NetworkError::UnknownNode(format!("{vertex:?}")))?;

        Ok(self
            .neighbors(index)?
            .into_iter()
            .map(|j| &self.vertices[j])
            .collect())
    }

    /// Returns a mapping of vertices to their degree centrality: their in- and out-degree
    /// combined, divided by the number of other vertices.
    ///
    /// A lone vertex scores `1.0`. Directed graphs can score up to `2.0`.
    #[instrument(skip(self), fields(n = self.node_count()))]
    pub fn degree_centrality(&self) -> HashMap<T, f64> {
        let n = self.node_count();
        if n == 1 {
            return self.keyed(vec![1.0]);
        }

        let scale = 1.0 / n.saturating_sub(1).max(1) as f64;
        let out_degrees = self.adjacency_matrix.column_sum();
        let in_degrees = self.adjacency_matrix.row_sum();

        self.keyed(
            out_degrees
                .iter()
                .zip(in_degrees.iter())
                .map(|(out_d, in_d)| (out_d + in_d) * scale)
                .collect(),
        )
    }

    /// Returns a mapping of vertices to their closeness centrality, measured over the distances
    /// from the vertices that can reach them.
    #[instrument(skip(self), fields(n = self.node_count()))]
    pub fn closeness_centrality(&self) -> HashMap<T, f64> {
        self.keyed(compute_closeness(&self.predecessors()))
    }

    /// Returns a mapping of vertices to their local reaching centrality, the share of the other
    /// vertices reachable from them.
    #[instrument(skip(self), fields(n = self.node_count()))]
    pub fn global_reach_centrality(&self) -> HashMap<T, f64> {
        self.keyed(local_reaching(&self.successors()))
    }

    /// Returns the global reaching centrality of the network: how far the local reaching
    /// centralities fall short of the best-reaching vertex, on average.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::config::NetworkConfig;
    /// use costar::edge::Edge;
    /// use costar::graph::Network;
    ///
    /// let star = Network::from_edges(
    ///     [Edge::new("a", "b"), Edge::new("a", "c")],
    ///     NetworkConfig::default(),
    /// );
    /// assert_eq!(star.global_reaching_centrality(), 1.0);
    /// ```
    pub fn global_reaching_centrality(&self) -> f64 {
        global_reaching(&local_reaching(&self.successors()))
    }

    /// Returns a mapping of vertices to their eigenvector centrality (the relative importance of
    /// the vertex) in the network.
    ///
    /// Fails with [`NetworkError::NotConverged`] if power iteration doesn't settle within the
    /// configured number of iterations.
    pub fn eigenvector_centrality(&self) -> Result<HashMap<T, f64>> {
        let scores = compute_eigenvector(&self.adjacency_matrix, &self.config.eigenvector)?;

        Ok(self.keyed(scores))
    }

    /// Computes the requested centrality measure.
    pub fn centrality(&self, centrality: Centrality) -> Result<HashMap<T, f64>> {
        let scores = match centrality {
            Centrality::Degree => self.degree_centrality(),
            Centrality::Closeness => self.closeness_centrality(),
            Centrality::GlobalReach => self.global_reach_centrality(),
            Centrality::Eigenvector => self.eigenvector_centrality()?,
        };

        Ok(scores)
    }

    /// Builds a figure of the network, nodes colored by the requested centrality.
    ///
    /// Every figure of a network shares the same node positions.
    #[instrument(skip(self), fields(n = self.node_count()))]
    pub fn visualize(&self, centrality: Centrality) -> Result<Figure>
    where
        T: Display,
    {
        let scores = self.centrality(centrality)?;
        let colors = self.vertices.iter().map(|v| scores[v]).collect();
        let labels = self.vertices.iter().map(ToString::to_string).collect();
        let edges = self
            .edges
            .iter()
            .map(|edge| (self.index[edge.source()], self.index[edge.target()]));

        Ok(Figure::new(
            labels,
            &self.positions,
            edges,
            colors,
            &self.config.figure,
        ))
    }

    /// [`Network::visualize`] for a ranking given by name, e.g. `"degree"` or `"globalreach"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::config::NetworkConfig;
    /// use costar::edge::Edge;
    /// use costar::error::NetworkError;
    /// use costar::graph::Network;
    ///
    /// let network = Network::from_edges([Edge::new("a", "b")], NetworkConfig::default());
    ///
    /// assert!(network.visualize_by_name("closeness").is_ok());
    /// assert!(matches!(
    ///     network.visualize_by_name("pagerank"),
    ///     Err(NetworkError::UnsupportedRanking(_))
    /// ));
    /// ```
    pub fn visualize_by_name(&self, ranking: &str) -> Result<Figure>
    where
        T: Display,
    {
        self.visualize(ranking.parse()?)
    }

    /// Builds the figure colored by the configured [`FigureConfig::ranking`].
    ///
    /// [`FigureConfig::ranking`]: crate::config::FigureConfig::ranking
    pub fn figure(&self) -> Result<Figure>
    where
        T: Display,
    {
        self.visualize(self.config.figure.ranking)
    }

    //
    // Private
    //

    /// Maps per-index scores to their vertices.
    fn keyed(&self, scores: Vec<f64>) -> HashMap<T, f64> {
        debug_assert_eq!(scores.len(), self.vertices.len());

        self.vertices.iter().cloned().zip(scores).collect()
    }

    /// Outgoing adjacency lists, ascending.
    fn successors(&self) -> Vec<Vec<usize>> {
        self.adjacency_matrix
            .row_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &val)| val != 0.0)
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect()
    }

    /// Incoming adjacency lists, ascending.
    fn predecessors(&self) -> Vec<Vec<usize>> {
        self.adjacency_matrix
            .column_iter()
            .map(|column| {
                column
                    .iter()
                    .enumerate()
                    .filter(|(_, &val)| val != 0.0)
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect()
    }
}
