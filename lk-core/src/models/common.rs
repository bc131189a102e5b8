//! Common types shared by the problem and solution models.

/// A node is a unique identifier of a location, an integer in `[0, dimension)`.
pub type Node = usize;

/// An amount of nodes in the problem.
pub type Dimension = usize;

/// A non-negative integer distance between two nodes.
pub type Distance = u64;

/// A signed distance sum. Gains of partial alternating walks can go negative, so any
/// arithmetic which mixes distances has to be performed on this type after explicit widening.
pub type Gain = i64;
