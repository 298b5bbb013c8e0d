//! A collection of models to represent route optimization input and output.

mod matrix;
pub use self::matrix::DistanceMatrix;

mod point;
pub use self::point::Point;

mod result;
pub use self::result::*;

mod route;
pub use self::route::*;

/// A node is an index of a point in the original point set.
pub type Node = usize;

/// A path is a sequence of nodes which defines a visiting order.
pub type Path = Vec<Node>;
