//! This module reimports commonly used types.

pub use crate::algorithms::geometry::haversine_distance;

pub use crate::evolution::{CrossoverType, GeneticConfig};

pub use crate::models::{GeneticResult, OptimizationResult, Point, is_permutation_of, route_distance};

pub use crate::solver::{
    Comparison, OptimizerKind, RouteOptimizer, compare_optimizers, optimize_route, optimize_route_with_ga,
    optimize_routes, validate_points,
};

pub use crate::utils::{DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, Quota, Random, TimeQuota};
