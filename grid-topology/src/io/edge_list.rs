use crate::types::PetGridTopology;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    errors {
        EdgeListMalformedLine(line: String) {
            description("an edge list line does not consist of three whitespace-separated fields")
            display("an edge list line does not consist of three whitespace-separated fields: '{}'", line)
        }

        EdgeListMalformedNodeId(field: String) {
            description("an edge list node id is not a non-negative integer")
            display("an edge list node id is not a non-negative integer: '{}'", field)
        }

        EdgeListMalformedWeight(field: String) {
            description("an edge list weight is not a floating point number")
            display("an edge list weight is not a floating point number: '{}'", field)
        }
    }
}

/// Returns the conventional file name of the topology of a grid with the given dimension,
/// `topology_<dimension>.txt`.
///
/// This is only a naming convention; the writing functions below accept any path or sink.
pub fn topology_file_name(dimension: usize) -> String {
    format!("topology_{}.txt", dimension)
}

/// Writes the given topology as an edge list.
///
/// One line is written per edge, in edge insertion order, holding the source node id, the
/// target node id and the edge weight, separated by single spaces.
/// The weight is written in its shortest exact decimal form, so the default weight renders
/// as `-50.0`.
pub fn write_topology_as_edge_list<Writer: Write>(
    graph: &PetGridTopology,
    writer: &mut Writer,
) -> Result<()> {
    for edge in graph.edge_references() {
        writeln!(
            writer,
            "{} {} {:?}",
            edge.source().index(),
            edge.target().index(),
            edge.weight()
        )?;
    }

    Ok(())
}

/// Writes the given topology as an edge list into the file at the given path.
///
/// The file is created if missing and truncated otherwise, so repeated generation runs never
/// append to stale content.
pub fn write_topology_to_edge_list_file<P: AsRef<Path>>(
    graph: &PetGridTopology,
    path: P,
) -> Result<()> {
    debug!(
        "Writing topology with {} edges to edge list file '{}'",
        graph.edge_count(),
        path.as_ref().display()
    );

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_topology_as_edge_list(graph, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Reads a topology from an edge list.
///
/// Each line must hold three whitespace-separated fields: source node id, target node id and
/// edge weight.
/// The resulting graph has `max node id + 1` nodes; isolated nodes beyond the largest id
/// occurring in any edge are not representable in an edge list and cannot be recovered.
/// Edges are added in file order.
pub fn read_topology_from_edge_list<Reader: BufRead>(reader: Reader) -> Result<PetGridTopology> {
    let mut graph = PetGridTopology::with_capacity(0, 0);

    for line in reader.lines() {
        let line = line?;
        let fields: Vec<_> = line.split_whitespace().collect();
        let (source, target, weight) = match fields.as_slice() {
            &[source, target, weight] => (source, target, weight),
            _ => bail!(ErrorKind::EdgeListMalformedLine(line.clone())),
        };

        let source: usize = source
            .parse()
            .map_err(|_| ErrorKind::EdgeListMalformedNodeId(source.to_owned()))?;
        let target: usize = target
            .parse()
            .map_err(|_| ErrorKind::EdgeListMalformedNodeId(target.to_owned()))?;
        let weight: f64 = weight
            .parse()
            .map_err(|_| ErrorKind::EdgeListMalformedWeight(weight.to_owned()))?;

        while graph.node_count() <= source.max(target) {
            graph.add_node(());
        }
        graph.add_edge(NodeIndex::new(source), NodeIndex::new(target), weight);
    }

    Ok(graph)
}

/// Reads a topology from the edge list file at the given path.
pub fn read_topology_from_edge_list_file<P: AsRef<Path>>(path: P) -> Result<PetGridTopology> {
    debug!(
        "Reading topology from edge list file '{}'",
        path.as_ref().display()
    );

    let file = File::open(path)?;
    read_topology_from_edge_list(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::{
        read_topology_from_edge_list, topology_file_name, write_topology_as_edge_list,
    };
    use crate::grid::GridLayout;
    use crate::topology::create_grid_topology;
    use crate::types::{PetGridTopology, DEFAULT_EDGE_WEIGHT};
    use petgraph::visit::EdgeRef;
    use std::io::BufWriter;

    #[test]
    fn test_topology_file_name() {
        assert_eq!(topology_file_name(5), "topology_5.txt");
        assert_eq!(topology_file_name(100), "topology_100.txt");
    }

    #[test]
    fn test_write_2x2_topology() {
        let mut graph = PetGridTopology::with_capacity(0, 0);
        create_grid_topology(&mut graph, GridLayout::new(2), 1.0, DEFAULT_EDGE_WEIGHT);

        let mut writer = Vec::new();
        write_topology_as_edge_list(&graph, &mut writer).unwrap();
        assert_eq!(
            String::from_utf8(writer).unwrap(),
            "0 1 -50.0\n\
             0 2 -50.0\n\
             1 0 -50.0\n\
             1 3 -50.0\n\
             2 0 -50.0\n\
             2 3 -50.0\n\
             3 1 -50.0\n\
             3 2 -50.0\n"
        );
    }

    #[test]
    fn test_write_single_node_topology_is_empty() {
        let mut graph = PetGridTopology::with_capacity(0, 0);
        create_grid_topology(&mut graph, GridLayout::new(1), 1.0, DEFAULT_EDGE_WEIGHT);

        let mut writer = Vec::new();
        write_topology_as_edge_list(&graph, &mut writer).unwrap();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_write_read_simple() {
        let mut graph = PetGridTopology::with_capacity(0, 0);
        create_grid_topology(&mut graph, GridLayout::new(3), 1.5, DEFAULT_EDGE_WEIGHT);

        let mut writer = BufWriter::new(Vec::new());
        write_topology_as_edge_list(&graph, &mut writer).unwrap();
        let buffer = writer.into_inner().unwrap();
        let result = read_topology_from_edge_list(buffer.as_slice()).unwrap();

        assert_eq!(graph.node_count(), result.node_count());
        assert_eq!(graph.edge_count(), result.edge_count());

        for (edge, result_edge) in graph.edge_references().zip(result.edge_references()) {
            assert_eq!(edge.source(), result_edge.source());
            assert_eq!(edge.target(), result_edge.target());
            assert_eq!(edge.weight(), result_edge.weight());
        }
    }

    #[test]
    fn test_write_to_file_truncates() {
        use super::{read_topology_from_edge_list_file, write_topology_to_edge_list_file};

        let path = std::env::temp_dir().join("grid_topology_test_truncate.txt");

        let mut large = PetGridTopology::with_capacity(0, 0);
        create_grid_topology(&mut large, GridLayout::new(3), 2.0, DEFAULT_EDGE_WEIGHT);
        write_topology_to_edge_list_file(&large, &path).unwrap();

        let mut small = PetGridTopology::with_capacity(0, 0);
        create_grid_topology(&mut small, GridLayout::new(3), 1.0, DEFAULT_EDGE_WEIGHT);
        write_topology_to_edge_list_file(&small, &path).unwrap();

        let result = read_topology_from_edge_list_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(result.edge_count(), small.edge_count());
    }

    #[test]
    fn test_read_empty_edge_list() {
        let graph = read_topology_from_edge_list(&b""[..]).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_read_malformed_line() {
        assert!(read_topology_from_edge_list(&b"0 1\n"[..]).is_err());
        assert!(read_topology_from_edge_list(&b"0 1 -50.0 7\n"[..]).is_err());
        assert!(read_topology_from_edge_list(&b"a 1 -50.0\n"[..]).is_err());
        assert!(read_topology_from_edge_list(&b"0 -1 -50.0\n"[..]).is_err());
        assert!(read_topology_from_edge_list(&b"0 1 fifty\n"[..]).is_err());
    }
}
