//! Costar is a small toolkit for exploring directed relationship networks, such as which
//! characters appear alongside which in a comic series.
//!
//! # Basic usage
//!
//! The library is centered around the [`Network`](graph::Network) structure which is built once
//! from an [`EdgeTable`](table::EdgeTable) (or any set of [`Edge`](edge::Edge) instances). Once
//! constructed, neighbours and centrality measures can be queried and figures rendered.
//!
//! ```rust
//! use costar::centrality::Centrality;
//! use costar::config::NetworkConfig;
//! use costar::graph::Network;
//! use costar::table::EdgeTable;
//!
//! // Edge lists are usually read from CSV with `source` and `target` columns.
//! let csv = "source,target\nThor,Loki\nLoki,Odin\nOdin,Thor\n";
//! let table = EdgeTable::from_reader(csv.as_bytes()).unwrap();
//!
//! let network = Network::from_table(&table, NetworkConfig::default());
//!
//! // Indices follow the order vertices first appear in: Thor, Loki, Odin.
//! assert_eq!(network.neighbors(0).unwrap(), vec![1]);
//!
//! // Every vertex of a cycle is equally central.
//! let degree = network.degree_centrality();
//! assert_eq!(degree["Thor"], degree["Odin"]);
//!
//! // Figures share one layout, only the coloring changes between measures.
//! let figure = network.visualize(Centrality::Closeness).unwrap();
//! println!("{}", figure.to_json().unwrap());
//! ```

pub mod centrality;
mod closeness;
pub mod config;
pub mod edge;
mod eigenvector;
pub mod error;
pub mod figure;
pub mod graph;
pub mod layout;
mod reaching;
pub mod table;
