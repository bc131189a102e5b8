//! A core crate with the building blocks of the Lin-Kernighan heuristic for the symmetric
//! [`Traveling Salesman Problem`](https://en.wikipedia.org/wiki/Travelling_salesman_problem).
//!
//! # Key points
//!
//! The crate is organized around a small set of collaborating models and one search engine:
//!
//! - [`models`] contains the problem definition (a symmetric integer distance matrix), the tour
//!   (a cyclic permutation of all nodes) and the alternating walk which describes a sequential
//!   edge exchange as a vertex sequence.
//! - [`algorithms`] contains reusable graph algorithms, most notably the alpha-nearness measure
//!   derived from a minimum 1-tree relaxation.
//! - [`solver`] contains candidate edge generation, the depth-bounded k-opt search and a
//!   multi-start driver on top of it.
//! - [`utils`] contains environment specific concerns: random generator abstraction, logging
//!   and error types.
//!
//! The search itself is strictly single threaded: the engine owns its working state exclusively
//! and shares the problem and candidate edges by read-only handles.
//!
//! # Examples
//!
//! The most simple way to run the solver on a problem is to build candidate edges and use the
//! multi-start driver:
//!
//! ```
//! # use std::sync::Arc;
//! use lk_core::prelude::*;
//!
//! // a 4x4 grid of distances: a unit square with expensive diagonals
//! let problem = Arc::new(Problem::new(4, vec![
//!     0, 1, 2, 1, //
//!     1, 0, 1, 2, //
//!     2, 1, 0, 1, //
//!     1, 2, 1, 0, //
//! ])?);
//!
//! let candidates = Arc::new(CandidateEdges::create(&problem, CandidateEdgeKind::All));
//! let environment = Arc::new(Environment::default());
//! let solver = LinKernighanSolver::new(problem.clone(), candidates, environment, SolverConfig::default());
//!
//! let tour = solver.solve()?;
//!
//! assert_eq!(problem.tour_length(&tour), 4);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod prelude;

pub mod algorithms;
pub mod models;
pub mod solver;
pub mod utils;
