//! This module contains local search operators which refine an existing visiting order.

mod two_opt;
pub use self::two_opt::*;
