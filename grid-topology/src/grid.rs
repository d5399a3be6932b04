/// A square grid of network nodes.
///
/// Nodes are identified by linear indices in `[0, dimension^2)`, assigned row-major:
/// the node in row `row` and column `column` has the identifier `row * dimension + column`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridLayout {
    dimension: usize,
}

impl GridLayout {
    /// Creates the layout of a square grid with `dimension * dimension` nodes.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Returns the side length of the grid.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the amount of nodes in the grid.
    pub fn node_count(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Returns the grid position of a node as `(row, column)`.
    ///
    /// The decomposition is `row = node / dimension`, `column = node % dimension`.
    /// Both operands are non-negative, so the truncating integer division equals floor division.
    #[inline]
    pub fn position(&self, node: usize) -> (usize, usize) {
        debug_assert!(node < self.node_count());
        (node / self.dimension, node % self.dimension)
    }

    /// Returns the identifier of the node at the given grid position.
    /// This is the inverse of [`position`](Self::position).
    #[inline]
    pub fn node_at(&self, row: usize, column: usize) -> usize {
        debug_assert!(row < self.dimension && column < self.dimension);
        row * self.dimension + column
    }

    /// Returns the Euclidean distance between the grid positions of two nodes.
    pub fn euclidean_distance(&self, a: usize, b: usize) -> f64 {
        let (a_row, a_column) = self.position(a);
        let (b_row, b_column) = self.position(b);
        let row_delta = a_row as f64 - b_row as f64;
        let column_delta = a_column as f64 - b_column as f64;
        (row_delta * row_delta + column_delta * column_delta).sqrt()
    }

    /// Returns the neighbours of a node, i.e. all other nodes whose grid position lies within
    /// Euclidean distance `range` of the node's own position.
    ///
    /// The node itself (distance zero) is never a neighbour.
    /// The result is ordered by the scan over the grid, rows ascending in the outer loop and
    /// columns ascending in the inner loop, which equals ascending identifier order.
    /// Consumers rely on this order for reproducible output.
    pub fn neighbours(&self, node: usize, range: f64) -> Vec<usize> {
        debug_assert!(node < self.node_count());
        let mut neighbours = Vec::new();

        for row in 0..self.dimension {
            for column in 0..self.dimension {
                let candidate = self.node_at(row, column);
                let distance = self.euclidean_distance(node, candidate);

                if distance > 0.0 && distance <= range {
                    neighbours.push(candidate);
                }
            }
        }

        neighbours
    }
}
