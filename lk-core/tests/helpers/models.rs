use crate::models::common::{Distance, Node};
use crate::models::{Problem, Tour};

/// Creates a problem from a square slice of distance rows.
pub fn create_matrix_problem(matrix: &[&[Distance]]) -> Problem {
    let dimension = matrix.len();
    let matrix = matrix.iter().flat_map(|row| row.iter().copied()).collect();

    Problem::new(dimension, matrix).expect("cannot create problem from test matrix")
}

/// Creates a unit square with expensive diagonals: the optimal tour is `(0, 1, 2, 3)` with
/// length 4, the worst tour is `(0, 2, 1, 3)` with length 6.
pub fn create_square_problem() -> Problem {
    create_matrix_problem(&[
        &[0, 1, 2, 1], //
        &[1, 0, 1, 2],
        &[2, 1, 0, 1],
        &[1, 2, 1, 0],
    ])
}

/// Creates a regular pentagon: adjacent nodes at distance 1, chords at distance 2. The optimal
/// tour visits the nodes in circular order and has length 5.
pub fn create_pentagon_problem() -> Problem {
    create_ring_problem(5)
}

/// Creates a ring instance of the given dimension: nodes on a circle with the circular index
/// distance as the metric. The optimal tour visits the nodes in circular order.
pub fn create_ring_problem(dimension: usize) -> Problem {
    let matrix = (0..dimension)
        .flat_map(|i| {
            (0..dimension).map(move |j| {
                let diff = i.abs_diff(j);
                diff.min(dimension - diff) as Distance
            })
        })
        .collect();

    Problem::new(dimension, matrix).expect("cannot create ring problem")
}

/// Creates a tour from the given order.
pub fn create_tour(order: &[Node]) -> Tour {
    Tour::new(order.to_vec()).expect("cannot create tour from test order")
}

/// Asserts that the given tour visits every node of a problem with the given dimension once.
pub fn assert_valid_permutation(tour: &Tour, dimension: usize) {
    assert_eq!(tour.dimension(), dimension);

    let mut visited = vec![false; dimension];
    tour.nodes().for_each(|node| {
        assert!(!visited[node], "node {node} is visited more than once");
        visited[node] = true;
    });
}
