#[cfg(test)]
#[path = "../../tests/unit/solver/candidates_test.rs"]
mod candidates_test;

use crate::algorithms::alpha::{alpha_distances, optimized_alpha_distances};
use crate::models::common::{Dimension, Node};
use crate::models::Problem;
use std::cmp::Ordering;

/// Selects the way candidate edges are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateEdgeKind {
    /// Every other node is a candidate, in arbitrary order.
    All,
    /// The `k` nodes with the smallest distance, sorted ascending.
    Nearest {
        /// Amount of candidates per node.
        k: usize,
    },
    /// The `k` nodes with the smallest `(alpha, distance)` key, sorted ascending.
    AlphaNearest {
        /// Amount of candidates per node.
        k: usize,
    },
    /// Same as [`CandidateEdgeKind::AlphaNearest`], but with alpha values computed after a
    /// subgradient adjustment of node penalties.
    OptimizedAlphaNearest {
        /// Amount of candidates per node.
        k: usize,
    },
}

/// A per-node shortlist of neighbor candidates used to prune the branching of the k-opt search.
///
/// Candidate lists never contain the node itself, and their order matters: the search probes
/// candidates starting from the end of each list. Built once per problem instance, immutable
/// afterwards.
pub struct CandidateEdges {
    edges: Vec<Vec<Node>>,
}

impl CandidateEdges {
    /// Creates candidate edges of the given kind.
    pub fn create(problem: &Problem, kind: CandidateEdgeKind) -> Self {
        match kind {
            CandidateEdgeKind::All => Self::all_neighbors(problem),
            CandidateEdgeKind::Nearest { k } => Self::nearest_neighbors(problem, k),
            CandidateEdgeKind::AlphaNearest { k } => Self::alpha_nearest_neighbors(problem, k),
            CandidateEdgeKind::OptimizedAlphaNearest { k } => Self::optimized_alpha_nearest_neighbors(problem, k),
        }
    }

    /// Creates candidate edges with every other node as a candidate.
    pub fn all_neighbors(problem: &Problem) -> Self {
        let dimension = problem.dimension();
        let edges = (0..dimension).map(|node| (0..dimension).filter(|&other| other != node).collect()).collect();

        Self { edges }
    }

    /// Creates candidate edges with the `k` nearest neighbors of each node.
    pub fn nearest_neighbors(problem: &Problem, k: usize) -> Self {
        Self::select_nearest(problem.dimension(), k, |node, left, right| {
            problem.distance(node, left).cmp(&problem.distance(node, right))
        })
    }

    /// Creates candidate edges with the `k` alpha-nearest neighbors of each node, raw distance
    /// as the tiebreak.
    pub fn alpha_nearest_neighbors(problem: &Problem, k: usize) -> Self {
        let alpha = alpha_distances(problem.dimension(), |from, to| problem.distance(from, to));

        Self::select_nearest(problem.dimension(), k, |node, left, right| {
            (alpha[node][left], problem.distance(node, left)).cmp(&(alpha[node][right], problem.distance(node, right)))
        })
    }

    /// Creates candidate edges with the `k` alpha-nearest neighbors of each node, where alpha
    /// values are computed from penalty-adjusted costs.
    pub fn optimized_alpha_nearest_neighbors(problem: &Problem, k: usize) -> Self {
        let alpha = optimized_alpha_distances(problem.dimension(), |from, to| problem.distance(from, to));

        Self::select_nearest(problem.dimension(), k, |node, left, right| {
            (alpha[node][left], problem.distance(node, left)).cmp(&(alpha[node][right], problem.distance(node, right)))
        })
    }

    /// Returns the ordered candidate list of the given node.
    pub fn get(&self, node: Node) -> &[Node] {
        self.edges[node].as_slice()
    }

    /// Selects for every node the `k` smallest other nodes according to the given comparator.
    fn select_nearest<F>(dimension: Dimension, k: usize, compare: F) -> Self
    where
        F: Fn(Node, Node, Node) -> Ordering,
    {
        let edges = (0..dimension)
            .map(|node| {
                let mut neighbors: Vec<Node> = (0..dimension).filter(|&other| other != node).collect();
                neighbors.sort_by(|&left, &right| compare(node, left, right));
                neighbors.truncate(k);
                neighbors
            })
            .collect();

        Self { edges }
    }
}
