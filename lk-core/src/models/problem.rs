#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::models::common::{Dimension, Distance, Gain, Node};
use crate::models::{AlternatingWalk, Tour};
use crate::utils::GenericError;

/// A symmetric TSP instance backed by a full distance matrix.
///
/// The problem is immutable after construction and safe to share by a read-only handle between
/// the candidate edge generation, the search engine and the driver.
pub struct Problem {
    dimension: Dimension,
    matrix: Vec<Distance>,
}

impl Problem {
    /// Creates a problem from a row-major distance matrix of size `dimension` x `dimension`.
    ///
    /// Returns an error if the matrix has a wrong size, is not symmetric or has a non-zero
    /// diagonal. A meaningful instance requires at least three nodes.
    pub fn new(dimension: Dimension, matrix: Vec<Distance>) -> Result<Self, GenericError> {
        if dimension < 3 {
            return Err(format!("the problem requires at least three nodes, got {dimension}").into());
        }

        if matrix.len() != dimension * dimension {
            return Err(format!(
                "a distance matrix of size {dimension}x{dimension} is expected, got {} entries",
                matrix.len()
            )
            .into());
        }

        for i in 0..dimension {
            if matrix[i * dimension + i] != 0 {
                return Err(format!("the distance matrix has a non-zero diagonal entry at node {i}").into());
            }

            for j in (i + 1)..dimension {
                if matrix[i * dimension + j] != matrix[j * dimension + i] {
                    return Err(format!("the distance matrix is not symmetric for nodes {i} and {j}").into());
                }
            }
        }

        Ok(Self { dimension, matrix })
    }

    /// Returns the amount of nodes in the problem.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns the distance between two nodes.
    pub fn distance(&self, from: Node, to: Node) -> Distance {
        self.matrix[from * self.dimension + to]
    }

    /// Returns the total length of the given tour including the closing edge.
    pub fn tour_length(&self, tour: &Tour) -> Distance {
        let first = tour.nodes().next().expect("tour must not be empty");

        let (length, last) = tour
            .nodes()
            .skip(1)
            .fold((0, first), |(length, prev), node| (length + self.distance(prev, node), node));

        length + self.distance(last, first)
    }

    /// Returns the signed gain of the given alternating walk: the sum of out-edge distances
    /// minus the sum of in-edge distances, taking the walk as given (closed or not).
    ///
    /// The gain of a partial walk can be negative.
    pub fn exchange_gain(&self, walk: &AlternatingWalk) -> Gain {
        walk.as_slice()
            .windows(2)
            .zip(0..)
            .map(|(pair, idx)| {
                let distance = self.distance(pair[0], pair[1]) as Gain;
                if idx % 2 == 0 { distance } else { -distance }
            })
            .sum()
    }
}
