//! Text output formats built on top of parsed allocations.

pub mod prefix_list;

pub use prefix_list::*;
