//! A command line interface to route optimization library.
//!
//! Besides the binary, the crate exposes helper functionality used by the commands: points import
//! from json and csv formats, configuration reading and interruption handling.

#![warn(missing_docs)]

pub use routing_core as core;

pub mod extensions;
