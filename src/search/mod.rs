//! Strategy search.
//!
//! Responsibilities:
//!
//! - enumerate the candidate grid (pit-lap window x compound pairs)
//! - score each candidate with a fixed-seed Monte Carlo estimate
//! - track the running best (with observer notifications) and rank the top-k

pub mod grid;
pub mod optimizer;

pub use grid::*;
pub use optimizer::*;
