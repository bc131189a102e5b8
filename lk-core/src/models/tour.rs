#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::common::{Dimension, Node};
use crate::models::AlternatingWalk;
use crate::utils::GenericError;

/// A tour is a cyclic permutation which visits each node exactly once.
///
/// The tour keeps both the visiting order and a node-to-position index, so neighbor queries are
/// constant time. It owns its state and is mutated only by [`Tour::exchange`].
#[derive(Clone, Debug)]
pub struct Tour {
    order: Vec<Node>,
    position: Vec<usize>,
}

impl Tour {
    /// Creates a tour from the given visiting order.
    ///
    /// Returns an error if the order is not a permutation of `0..order.len()` or has less than
    /// three nodes.
    pub fn new(order: Vec<Node>) -> Result<Self, GenericError> {
        if order.len() < 3 {
            return Err(format!("a tour requires at least three nodes, got {}", order.len()).into());
        }

        let mut position = vec![usize::MAX; order.len()];
        for (idx, &node) in order.iter().enumerate() {
            let slot = position
                .get_mut(node)
                .ok_or_else(|| GenericError::from(format!("node {node} is out of bounds")))?;

            if *slot != usize::MAX {
                return Err(format!("node {node} is visited more than once").into());
            }
            *slot = idx;
        }

        Ok(Self { order, position })
    }

    /// Returns the amount of nodes on the tour.
    pub fn dimension(&self) -> Dimension {
        self.order.len()
    }

    /// Returns the node visited directly after the given node.
    pub fn successor(&self, node: Node) -> Node {
        self.order[(self.position[node] + 1) % self.order.len()]
    }

    /// Returns the node visited directly before the given node.
    pub fn predecessor(&self, node: Node) -> Node {
        let position = self.position[node];
        let prev = if position == 0 { self.order.len() - 1 } else { position - 1 };
        self.order[prev]
    }

    /// Returns both tour neighbors of the given node as an unordered pair.
    pub fn neighbors(&self, node: Node) -> [Node; 2] {
        [self.predecessor(node), self.successor(node)]
    }

    /// Returns true if the two nodes are direct neighbors on the tour.
    pub fn contains_edge(&self, first: Node, second: Node) -> bool {
        self.successor(first) == second || self.predecessor(first) == second
    }

    /// Returns an iterator over the nodes in visiting order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.order.iter().copied()
    }

    /// Returns true iff removing the out-edges and adding the in-edges of the given closed walk
    /// yields again a single Hamiltonian cycle.
    pub fn is_tour_after_exchange(&self, walk: &AlternatingWalk) -> bool {
        self.order_after_exchange(walk).is_some()
    }

    /// Applies the given closed walk to the tour in place.
    ///
    /// The walk must keep the tour intact, see [`Tour::is_tour_after_exchange`]. Passing an
    /// infeasible walk is a programmer error and aborts.
    pub fn exchange(&mut self, walk: &AlternatingWalk) {
        let order = self.order_after_exchange(walk).expect("the exchange walk must keep the tour intact");

        for (idx, &node) in order.iter().enumerate() {
            self.position[node] = idx;
        }
        self.order = order;
    }

    /// Simulates the exchange described by the closed walk and returns the new visiting order if
    /// the result is a single Hamiltonian cycle.
    fn order_after_exchange(&self, walk: &AlternatingWalk) -> Option<Vec<Node>> {
        let dimension = self.order.len();

        let mut links: Vec<[Node; 2]> = (0..dimension).map(|node| self.neighbors(node)).collect();
        let mut degrees: Vec<usize> = vec![2; dimension];

        let edges = |parity: usize| {
            walk.as_slice().windows(2).zip(0..).filter(move |(_, idx)| idx % 2 == parity).map(|(pair, _)| pair)
        };

        // drop out-edges first: an in-edge is allowed to restore a just removed tour edge
        for pair in edges(0) {
            let (a, b) = (pair[0], pair[1]);
            unlink(&mut links, &mut degrees, a, b)?;
            unlink(&mut links, &mut degrees, b, a)?;
        }

        for pair in edges(1) {
            let (a, b) = (pair[0], pair[1]);
            link(&mut links, &mut degrees, a, b)?;
            link(&mut links, &mut degrees, b, a)?;
        }

        if degrees.iter().any(|&degree| degree != 2) {
            return None;
        }

        // a closed walk keeps degrees balanced, so reaching the start node again after exactly
        // `dimension` steps certifies a single cycle
        let start = walk[0];
        let mut order = Vec::with_capacity(dimension);
        let (mut prev, mut current) = (start, links[start][0]);
        order.push(start);

        while current != start {
            if order.len() == dimension {
                return None;
            }
            order.push(current);

            let [first, second] = links[current];
            let next = if first == prev { second } else { first };
            (prev, current) = (current, next);
        }

        if order.len() == dimension { Some(order) } else { None }
    }
}

/// Removes `to` from the neighbor pair of `from`, failing if the edge is not present.
fn unlink(links: &mut [[Node; 2]], degrees: &mut [usize], from: Node, to: Node) -> Option<()> {
    let slot = (0..degrees[from]).find(|&idx| links[from][idx] == to)?;

    links[from][slot] = links[from][degrees[from] - 1];
    degrees[from] -= 1;
    Some(())
}

/// Adds `to` to the neighbor pair of `from`, failing if the node has already two neighbors or
/// the edge is already present.
fn link(links: &mut [[Node; 2]], degrees: &mut [usize], from: Node, to: Node) -> Option<()> {
    if degrees[from] == 2 || links[from][..degrees[from]].contains(&to) {
        return None;
    }

    links[from][degrees[from]] = to;
    degrees[from] += 1;
    Some(())
}
