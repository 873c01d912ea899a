//! Instance graph fixtures for the node validators.
//!
//! Each constant holds a small Turtle 1.1 graph of road network nodes. The
//! star graph is valid; every other fixture breaks exactly one rule.

mod broken;
mod star;

pub use broken::{BROKEN_DEGREE, DANGLING_EDGE, WRONG_BAND};
pub use star::STAR_GRAPH;
