//! This crate contains logic to read TSP instances in a subset of the
//! [`TSPLIB95`](http://comopt.ifi.uni-heidelberg.de/software/TSPLIB95/) format and to write the
//! resulting tours.
//!
//! # Supported format
//!
//! Only symmetric instances of `TYPE: TSP` are supported with one of the following edge weight
//! types:
//!
//! - **EUC_2D**: two dimensional coordinates, euclidean distances rounded to nearest integer
//! - **CEIL_2D**: two dimensional coordinates, euclidean distances rounded up
//! - **EXPLICIT**: a distance matrix given as `FULL_MATRIX`, `UPPER_ROW`, `UPPER_DIAG_ROW`,
//!   `LOWER_ROW` or `LOWER_DIAG_ROW`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub use lk_core as core;

mod reader;
pub use self::reader::TsplibProblem;

mod writer;
pub use self::writer::TsplibSolution;
