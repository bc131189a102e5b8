#[cfg(test)]
#[path = "../../tests/unit/solver/search_test.rs"]
mod search_test;

use crate::models::common::{Gain, Node};
use crate::models::{AlternatingWalk, Problem, Tour};
use crate::solver::candidates::CandidateEdges;
use std::sync::Arc;

/// Depth limits of the k-opt search.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// The level to which backtracking rewinds the search when a deeper level is exhausted.
    pub backtracking_depth: usize,
    /// Up to this even level, out-edges may leave the walk temporarily infeasible; beyond it,
    /// every out-edge candidate must already close to a valid tour.
    pub infeasibility_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { backtracking_depth: 5, infeasibility_depth: 2 }
    }
}

/// The Lin-Kernighan tour improvement engine: a depth-bounded backtracking search over
/// alternating walks which generalizes 2-opt to sequential k-opt exchanges.
pub struct LinKernighan {
    problem: Arc<Problem>,
    candidates: Arc<CandidateEdges>,
    config: SearchConfig,
}

impl LinKernighan {
    /// Creates a new instance of [`LinKernighan`].
    pub fn new(problem: Arc<Problem>, candidates: Arc<CandidateEdges>, config: SearchConfig) -> Self {
        Self { problem, candidates, config }
    }

    /// Improves the given tour by repeatedly applying the best improving edge exchange found by
    /// the bounded search, until no improving exchange exists.
    ///
    /// The returned tour is never longer than the start tour. An optional incumbent tour
    /// diversifies the search: the first edge broken in any exchange is then required to not lie
    /// on the incumbent.
    pub fn improve_tour(&self, start_tour: Tour, best_tour: Option<&Tour>) -> Tour {
        let dimension = self.problem.dimension();

        let mut current_tour = start_tour;
        let mut vertex_choices: Vec<Vec<Node>> = Vec::new();
        let mut current_walk = AlternatingWalk::default();
        let mut best_walk = AlternatingWalk::default();
        let mut highest_gain: Gain;

        loop {
            // level 0 tries every node as the walk start
            vertex_choices.clear();
            vertex_choices.push((0..dimension).collect());
            current_walk.clear();
            best_walk.clear();
            highest_gain = 0;
            let mut i = 0;

            loop {
                assert_eq!(current_walk.len(), i, "the alternating walk is out of sync with the search level");
                assert_eq!(vertex_choices.len(), i + 1, "the vertex choices are out of sync with the search level");

                let Some(node) = vertex_choices[i].pop() else {
                    if highest_gain > 0 {
                        current_tour.exchange(&best_walk);
                        break;
                    }

                    if i == 0 {
                        // every walk start is exhausted without an improvement
                        return current_tour;
                    }

                    i = (i - 1).min(self.config.backtracking_depth);
                    vertex_choices.truncate(i + 1);
                    current_walk.truncate(i);
                    continue;
                };
                current_walk.push(node);

                if i % 2 == 1 && i >= 3 {
                    let closed_walk = current_walk.close();
                    let gain = self.problem.exchange_gain(&closed_walk);
                    if gain > highest_gain && current_tour.is_tour_after_exchange(&closed_walk) {
                        best_walk = closed_walk;
                        highest_gain = gain;
                    }
                }

                let choices = self.next_choices(i, &current_walk, &current_tour, best_tour, highest_gain);
                vertex_choices.push(choices);
                i += 1;
            }
        }
    }

    /// Populates the vertex choices of the next level from the last walk vertex.
    fn next_choices(
        &self,
        i: usize,
        walk: &AlternatingWalk,
        tour: &Tour,
        best_tour: Option<&Tour>,
        highest_gain: Gain,
    ) -> Vec<Node> {
        let xi = walk[i];
        let x0 = walk[0];

        if i % 2 == 1 {
            // an odd level picks an in-edge among the candidate neighbors of the walk end; any
            // extension must keep a chance to beat the incumbent gain
            let current_gain = self.problem.exchange_gain(walk);
            let [predecessor, successor] = tour.neighbors(xi);

            return self
                .candidates
                .get(xi)
                .iter()
                .copied()
                .filter(|&x| {
                    x != x0
                        && x != predecessor
                        && x != successor
                        && !walk.contains_edge(xi, x)
                        && current_gain - self.problem.distance(xi, x) as Gain > highest_gain
                })
                .collect();
        }

        // an even level picks an out-edge among the tour neighbors of the walk end
        match best_tour {
            Some(best_tour) if i == 0 => {
                // the first edge broken must not lie on the currently best tour
                let [best_predecessor, best_successor] = best_tour.neighbors(x0);

                tour.neighbors(xi)
                    .into_iter()
                    .filter(|&neighbor| neighbor != x0 && neighbor != best_predecessor && neighbor != best_successor)
                    .collect()
            }
            _ if i <= self.config.infeasibility_depth => {
                // within the infeasibility window the walk does not need to close to a valid tour
                tour.neighbors(xi)
                    .into_iter()
                    .filter(|&neighbor| neighbor != x0 && !walk.contains_edge(xi, neighbor))
                    .collect()
            }
            _ => {
                // breaking the edge must already close to a valid tour; the added closure edge
                // {neighbor, x0} can only coincide with a walk edge when neighbor is x1
                tour.neighbors(xi)
                    .into_iter()
                    .filter(|&neighbor| {
                        neighbor != x0
                            && !walk.contains_edge(xi, neighbor)
                            && neighbor != walk[1]
                            && tour.is_tour_after_exchange(&walk.append_and_close(neighbor))
                    })
                    .collect()
            }
        }
    }
}
