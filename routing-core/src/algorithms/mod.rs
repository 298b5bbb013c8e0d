//! This module contains generic algorithms which are not tied to route optimization directly.

pub mod geometry;
