//! This crate contains building blocks to optimize a visiting order of geographic stops.
//!
//! The main entry point is [`solver::optimize_route`] which builds an initial tour with the
//! nearest neighbour heuristic and refines it with 2-opt local search. An alternative entry point,
//! [`solver::optimize_route_with_ga`], runs a genetic algorithm which is more suitable for larger
//! point sets or for benchmarking.
//!
//! # Examples
//!
//! ```
//! use routing_core::prelude::*;
//!
//! let points = vec![
//!     Point::new("a", "Depot", 0., 0.),
//!     Point::new("c", "Hotel", 0., 2.),
//!     Point::new("b", "Airport", 0., 1.),
//! ];
//!
//! let result = optimize_route(&points);
//!
//! assert!(result.optimized_distance <= result.original_distance);
//! assert_eq!(result.optimized_order.len(), 3);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod construction;
pub mod evolution;
pub mod models;
pub mod prelude;
pub mod search;
pub mod solver;
pub mod utils;
