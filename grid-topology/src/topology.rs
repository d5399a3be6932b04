use crate::grid::GridLayout;
use crate::types::PetGridTopology;
use petgraph::graph::NodeIndex;

/// Adds the neighbourhood topology of a square grid to the given graph.
/// Assumes that the graph is empty.
///
/// One node is added per grid cell, in ascending identifier order, followed by one directed
/// edge `(node, neighbour, weight)` for every ordered pair of distinct nodes whose grid
/// positions lie within Euclidean distance `range` of each other.
/// Since distance is symmetric, both directions of a pair are added independently, each while
/// its own source node is scanned.
/// Edges are added source by source in ascending identifier order, and per source in the
/// neighbour order of [`GridLayout::neighbours`], so edge insertion order is the canonical
/// output order of the topology.
pub fn create_grid_topology(
    graph: &mut PetGridTopology,
    layout: GridLayout,
    range: f64,
    weight: f64,
) {
    for _ in 0..layout.node_count() {
        graph.add_node(());
    }

    for node in 0..layout.node_count() {
        for neighbour in layout.neighbours(node, range) {
            graph.add_edge(NodeIndex::new(node), NodeIndex::new(neighbour), weight);
        }
    }
}
