/// A module providing functions to read and write topologies as edge list files.
pub mod edge_list;
