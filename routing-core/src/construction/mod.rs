//! This module contains constructive heuristics which build an initial visiting order.
//!
//! # Nearest neighbour
//!
//! Nearest neighbour heuristic starts from the first point and repeatedly moves to the closest
//! unvisited one. It is fast and gives a reasonable seed for local search, but without a guarantee
//! of good quality.

mod nearest_neighbour;
pub use self::nearest_neighbour::*;
