//! A module for ingesting tabular edge lists.
//!
//! Rows are taken as-is: empty cells and short rows become empty-string labels, duplicate rows
//! are kept (the graph collapses them later) and self-loops are allowed.

use std::{fs::File, io::Read, path::Path};

use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    error::{NetworkError, Result},
};

/// Name of the column holding the edge sources.
pub const SOURCE_COLUMN: &str = "source";
/// Name of the column holding the edge targets.
pub const TARGET_COLUMN: &str = "target";

/// An ordered list of `(source, target)` label pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeTable {
    rows: Vec<(String, String)>,
}

impl EdgeTable {
    /// Creates a table from in-memory pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::table::EdgeTable;
    ///
    /// let table = EdgeTable::from_pairs([("Thor", "Loki"), ("Loki", "Thor")]);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            rows: pairs
                .into_iter()
                .map(|(source, target)| (source.into(), target.into()))
                .collect(),
        }
    }

    /// Reads CSV with a header row containing at least the `source` and `target` columns, any
    /// other columns are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use costar::table::EdgeTable;
    ///
    /// let csv = "source,target,weight\nThor,Loki,3\nLoki,Odin,1\n";
    /// let table = EdgeTable::from_reader(csv.as_bytes()).unwrap();
    ///
    /// assert_eq!(table.rows()[1], ("Loki".to_string(), "Odin".to_string()));
    /// ```
    #[instrument(skip(reader))]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?;
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(NetworkError::MissingColumn(name))
        };
        let (source, target) = (column(SOURCE_COLUMN)?, column(TARGET_COLUMN)?);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cell = |i: usize| record.get(i).unwrap_or_default().to_owned();
            rows.push((cell(source), cell(target)));
        }

        debug!(rows = rows.len(), "read edge table");

        Ok(Self { rows })
    }

    /// Reads a CSV edge list from a file, see [`EdgeTable::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file)
    }

    /// Returns the rows in input order.
    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    /// Returns the number of rows, duplicates included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows as directed edges.
    pub fn edges(&self) -> impl Iterator<Item = Edge<String>> + '_ {
        self.rows.iter().cloned().map(Edge::from)
    }
}
