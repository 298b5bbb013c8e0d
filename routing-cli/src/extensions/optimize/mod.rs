//! Optimize command helpers

pub mod config;
pub mod interruption;
