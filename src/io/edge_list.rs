//! Delimited edge-list import/export
//!
//! Files carry a header row and one edge per record:
//!
//! ```csv
//! source,target,weight
//! A,B,1
//! B,C,-2.5
//! ```

use std::fmt::{Debug, Display};
use std::fs::File;
use std::hash::Hash;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use log::debug;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::graph::{GraphBuilder, WeightedGraph};
use crate::{Error, Result};

/// One `source,target,weight` record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Whether a record yields one directed edge or a symmetric pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeDirection {
    #[default]
    Directed,
    /// Each record adds `source -> target` and `target -> source`
    Undirected,
}

/// Parses edge records from CSV with a header row. Surrounding whitespace in
/// fields is ignored.
pub fn read_edge_records<R: Read>(reader: R) -> Result<Vec<EdgeRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<EdgeRecord>() {
        let record = row.map_err(|err| Error::EdgeList {
            line: err.position().map(|pos| pos.line()).unwrap_or(0),
            message: err.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Reads a CSV edge list into a graph keyed by vertex label
pub fn read_graph<R: Read>(reader: R, direction: EdgeDirection) -> Result<WeightedGraph<String, f64>> {
    let graph = build_graph(read_edge_records(reader)?, direction)?;
    debug!(
        "Loaded {:?} edge list: {} vertices, {} edges",
        direction,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Builds a graph from already-parsed records, adding each one as a single
/// edge or a symmetric pair depending on `direction`
pub fn build_graph<I>(records: I, direction: EdgeDirection) -> Result<WeightedGraph<String, f64>>
where
    I: IntoIterator<Item = EdgeRecord>,
{
    let records = records.into_iter();
    let factor = if direction == EdgeDirection::Undirected { 2 } else { 1 };
    let (hint, _) = records.size_hint();
    let mut builder = GraphBuilder::with_capacity(hint, hint * factor);

    for record in records {
        match direction {
            EdgeDirection::Directed => builder.add_edge(record.source, record.target, record.weight)?,
            EdgeDirection::Undirected => {
                builder.add_symmetric_edge(record.source, record.target, record.weight)?
            }
        };
    }

    Ok(builder.build())
}

/// [`read_graph`] from a file on disk
pub fn read_graph_from_path<P: AsRef<Path>>(path: P, direction: EdgeDirection) -> Result<WeightedGraph<String, f64>> {
    let file = File::open(path.as_ref())?;
    read_graph(BufReader::new(file), direction)
}

/// Writes every edge of `graph` as a CSV record, header first
pub fn write_edge_list<Wr, K, W>(writer: Wr, graph: &WeightedGraph<K, W>) -> Result<()>
where
    Wr: Write,
    K: Clone + Eq + Hash + Debug + Display,
    W: Float + Debug + Display,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["source", "target", "weight"])?;

    for edge in graph.all_edges() {
        let source = graph.vertex(edge.source).ok_or(Error::InvalidVertex(edge.source))?;
        let target = graph.vertex(edge.target).ok_or(Error::InvalidVertex(edge.target))?;
        csv_writer.write_record([source.to_string(), target.to_string(), edge.weight.to_string()])?;
    }

    csv_writer.flush()?;
    Ok(())
}
