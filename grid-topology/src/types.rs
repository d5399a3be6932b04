/// A grid topology represented using the `petgraph` crate.
///
/// The graph is indexed with `usize` so that petgraph node indices coincide with the linear
/// node identifiers of a [`GridLayout`](crate::grid::GridLayout).
/// Edges carry their weight as the only data.
pub type PetGridTopology = petgraph::graph::DiGraph<(), f64, usize>;

/// The weight assigned to every edge of a generated topology.
///
/// The consuming network simulation interprets this as a link gain of -50.0 dBm; no other
/// weight model exists.
pub const DEFAULT_EDGE_WEIGHT: f64 = -50.0;
