#[cfg(test)]
#[path = "../../../tests/unit/algorithms/alpha/one_tree_test.rs"]
mod one_tree_test;

use crate::models::common::{Dimension, Gain, Node};

/// The special node which is kept outside of the spanning tree and reconnected by its two
/// cheapest edges.
pub(crate) const SPECIAL_NODE: Node = 0;

const ROOT_NODE: Node = 1;

/// A minimum 1-tree: a minimum spanning tree over all nodes but [`SPECIAL_NODE`], plus the two
/// cheapest edges incident to the special node. Its length is a lower bound on the optimal tour
/// length (the Held-Karp relaxation).
pub(crate) struct OneTree {
    order: Vec<Node>,
    parents: Vec<Node>,
    parent_costs: Vec<Gain>,
    special: [Node; 2],
    special_costs: [Gain; 2],
    degrees: Vec<usize>,
    length: Gain,
}

impl OneTree {
    /// Builds a minimum 1-tree for a complete graph with the given edge costs.
    pub fn new<F>(dimension: Dimension, cost: F) -> Self
    where
        F: Fn(Node, Node) -> Gain,
    {
        debug_assert!(dimension >= 3);

        let mut in_tree = vec![false; dimension];
        let mut parents = vec![ROOT_NODE; dimension];
        let mut parent_costs = vec![0; dimension];
        let mut best_costs: Vec<Gain> =
            (0..dimension).map(|node| if node <= ROOT_NODE { Gain::MAX } else { cost(ROOT_NODE, node) }).collect();
        let mut degrees = vec![0; dimension];
        let mut length = 0;

        // Prim over all nodes but the special one
        let mut order = Vec::with_capacity(dimension - 1);
        order.push(ROOT_NODE);
        in_tree[ROOT_NODE] = true;

        for _ in 2..dimension {
            let node = (ROOT_NODE + 1..dimension)
                .filter(|&node| !in_tree[node])
                .min_by_key(|&node| best_costs[node])
                .expect("the spanning tree cannot cover all nodes");

            in_tree[node] = true;
            order.push(node);
            parent_costs[node] = best_costs[node];
            length += best_costs[node];
            degrees[node] += 1;
            degrees[parents[node]] += 1;

            for other in (ROOT_NODE + 1)..dimension {
                if !in_tree[other] && cost(node, other) < best_costs[other] {
                    best_costs[other] = cost(node, other);
                    parents[other] = node;
                }
            }
        }

        // reconnect the special node with its two cheapest edges
        let mut ends: Vec<(Gain, Node)> = (1..dimension).map(|node| (cost(SPECIAL_NODE, node), node)).collect();
        ends.sort_unstable();
        let (special, special_costs) = ([ends[0].1, ends[1].1], [ends[0].0, ends[1].0]);

        degrees[SPECIAL_NODE] = 2;
        degrees[special[0]] += 1;
        degrees[special[1]] += 1;
        length += special_costs[0] + special_costs[1];

        Self { order, parents, parent_costs, special, special_costs, degrees, length }
    }

    /// Returns the spanning tree nodes in construction order, the root first. Parents always
    /// precede their children in this order.
    pub fn order(&self) -> &[Node] {
        self.order.as_slice()
    }

    /// Returns the parent of a spanning tree node.
    pub fn parent(&self, node: Node) -> Node {
        self.parents[node]
    }

    /// Returns the cost of the edge which connects a spanning tree node to its parent.
    pub fn parent_cost(&self, node: Node) -> Gain {
        self.parent_costs[node]
    }

    /// Returns the degree of every node within the 1-tree.
    pub fn degrees(&self) -> &[usize] {
        self.degrees.as_slice()
    }

    /// Returns the total cost of all 1-tree edges.
    pub fn length(&self) -> Gain {
        self.length
    }

    /// Returns the cost of the larger of the two special node edges.
    pub fn max_special_cost(&self) -> Gain {
        self.special_costs[0].max(self.special_costs[1])
    }

    /// Returns true if the given node is connected to the special node within the 1-tree.
    pub fn is_special_edge(&self, node: Node) -> bool {
        self.special.contains(&node)
    }
}
