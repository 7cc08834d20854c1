pub mod edge_list;

pub use edge_list::{
    build_graph, read_edge_records, read_graph, read_graph_from_path, write_edge_list, EdgeDirection, EdgeRecord,
};
