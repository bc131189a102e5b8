//! The solver module contains the Lin-Kernighan k-opt search and a multi-start driver on top
//! of it.
//!
//! The driver repeats trials: it builds a guided random start tour, lets the search improve it
//! and keeps the shortest tour seen so far as the incumbent. The incumbent feeds back into the
//! next trials twice: the random tour generator prefers candidate edges lying on it, while the
//! search avoids breaking its edges first, which biases exploration away from the incumbent.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

pub mod candidates;
pub mod search;

use crate::models::common::{Distance, Node};
use crate::models::{Problem, Tour};
use crate::solver::candidates::CandidateEdges;
use crate::solver::search::{LinKernighan, SearchConfig};
use crate::utils::{Environment, GenericResult, Random};
use std::sync::Arc;

/// Configuration of the multi-start driver.
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Amount of trials to run, at least one.
    pub trials: usize,
    /// A known optimal (or target) tour length; zero disables the early exit.
    pub optimum_tour_length: Distance,
    /// The acceptable relative deviation from the optimum used by the early exit.
    pub acceptable_error: f64,
    /// Depth limits of the k-opt search.
    pub search: SearchConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { trials: 1, optimum_tour_length: 0, acceptable_error: 0., search: SearchConfig::default() }
    }
}

/// A multi-start driver around the [`LinKernighan`] search.
pub struct LinKernighanSolver {
    problem: Arc<Problem>,
    candidates: Arc<CandidateEdges>,
    environment: Arc<Environment>,
    config: SolverConfig,
}

impl LinKernighanSolver {
    /// Creates a new instance of [`LinKernighanSolver`].
    pub fn new(
        problem: Arc<Problem>,
        candidates: Arc<CandidateEdges>,
        environment: Arc<Environment>,
        config: SolverConfig,
    ) -> Self {
        Self { problem, candidates, environment, config }
    }

    /// Runs the configured amount of trials and returns the best tour found.
    ///
    /// Stops early once the best tour length falls below
    /// `(1 + acceptable_error) * optimum_tour_length`.
    pub fn solve(&self) -> GenericResult<Tour> {
        if self.config.trials < 1 {
            return Err("the number of trials cannot be lower than one".into());
        }

        let search = LinKernighan::new(self.problem.clone(), self.candidates.clone(), self.config.search);
        let logger = self.environment.logger.clone();

        let mut best_tour: Option<Tour> = None;
        let mut best_length = Distance::MAX;

        for trial in 1..=self.config.trials {
            let start_tour = self.generate_random_tour(best_tour.as_ref());
            let start_length = self.problem.tour_length(&start_tour);

            let improved_tour = search.improve_tour(start_tour, best_tour.as_ref());
            let improved_length = self.problem.tour_length(&improved_tour);

            if improved_length < best_length {
                best_tour = Some(improved_tour);
                best_length = improved_length;
            }

            (logger)(&format!(
                "trial {trial}: start length {start_length}, improved length {improved_length}, best length {best_length}"
            ));

            if (best_length as f64) < (1. + self.config.acceptable_error) * self.config.optimum_tour_length as f64 {
                break;
            }
        }

        Ok(best_tour.expect("at least one trial has run"))
    }

    /// Generates a random start tour guided by candidate edges and the incumbent tour.
    ///
    /// The successor of the current node is drawn uniformly from the first non-empty category:
    /// unplaced candidate neighbors lying on the incumbent, unplaced candidate neighbors, all
    /// unplaced nodes.
    fn generate_random_tour(&self, best_tour: Option<&Tour>) -> Tour {
        let dimension = self.problem.dimension();
        let random = self.environment.random.as_ref();

        let mut remaining: Vec<Node> = (0..dimension).collect();
        let mut placed = vec![false; dimension];
        let mut order = Vec::with_capacity(dimension);

        let mut current = choose_random_node(&remaining, random);
        place_node(current, &mut remaining, &mut placed, &mut order);

        let mut candidates_on_best = Vec::new();
        let mut candidates = Vec::new();
        while !remaining.is_empty() {
            candidates_on_best.clear();
            candidates.clear();

            for &other in self.candidates.get(current) {
                if !placed[other] {
                    if best_tour.is_some_and(|best| best.contains_edge(current, other)) {
                        candidates_on_best.push(other);
                    }
                    candidates.push(other);
                }
            }

            let pool = [&candidates_on_best, &candidates, &remaining]
                .into_iter()
                .find(|pool| !pool.is_empty())
                .expect("remaining nodes are not empty");

            current = choose_random_node(pool, random);
            place_node(current, &mut remaining, &mut placed, &mut order);
        }

        Tour::new(order).expect("the generated order visits every node once")
    }
}

/// Chooses an element uniformly at random.
fn choose_random_node(nodes: &[Node], random: &(dyn Random + Send + Sync)) -> Node {
    nodes[random.uniform_int(0, nodes.len() as i32 - 1) as usize]
}

/// Moves the given node from the remaining set into the tour order.
fn place_node(node: Node, remaining: &mut Vec<Node>, placed: &mut [bool], order: &mut Vec<Node>) {
    let idx = remaining.iter().position(|&other| other == node).expect("the node must not be placed twice");
    remaining.swap_remove(idx);
    placed[node] = true;
    order.push(node);
}
