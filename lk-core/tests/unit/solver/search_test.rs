use super::*;
use crate::helpers::models::{assert_valid_permutation, create_pentagon_problem, create_square_problem, create_tour};
use crate::models::common::Distance;
use proptest::prelude::*;

fn create_search(problem: Arc<Problem>, candidates: CandidateEdges) -> LinKernighan {
    LinKernighan::new(problem, Arc::new(candidates), SearchConfig::default())
}

/// Two clusters of five collinear nodes far apart: the optimal tour crosses between the
/// clusters over edges which no 2-nearest candidate list contains.
fn create_clustered_problem() -> Problem {
    let positions: Vec<Distance> = vec![0, 1, 2, 3, 4, 100, 101, 102, 103, 104];
    let dimension = positions.len();
    let matrix = positions.iter().flat_map(|&i| positions.iter().map(move |&j| i.abs_diff(j))).collect();

    Problem::new(dimension, matrix).expect("cannot create clustered problem")
}

#[test]
fn can_improve_worst_square_tour() {
    let problem = Arc::new(create_square_problem());
    let search = create_search(problem.clone(), CandidateEdges::all_neighbors(&problem));

    let improved = search.improve_tour(create_tour(&[0, 2, 1, 3]), None);

    assert_valid_permutation(&improved, 4);
    assert_eq!(problem.tour_length(&improved), 4);
}

#[test]
fn can_keep_optimal_square_tour() {
    let problem = Arc::new(create_square_problem());
    let search = create_search(problem.clone(), CandidateEdges::all_neighbors(&problem));

    let improved = search.improve_tour(create_tour(&[0, 1, 2, 3]), None);

    assert_valid_permutation(&improved, 4);
    assert_eq!(problem.tour_length(&improved), 4);
}

#[test]
fn can_reach_pentagon_optimum_from_any_start() {
    let problem = Arc::new(create_pentagon_problem());
    let search = create_search(problem.clone(), CandidateEdges::all_neighbors(&problem));

    for start in [[0, 1, 2, 3, 4], [0, 2, 4, 1, 3], [0, 3, 1, 4, 2], [1, 4, 2, 0, 3], [2, 0, 3, 1, 4]] {
        let improved = search.improve_tour(create_tour(&start), None);

        assert_valid_permutation(&improved, 5);
        assert_eq!(problem.tour_length(&improved), 5, "cannot reach the optimum from {start:?}");
    }
}

#[test]
fn can_improve_monotonically_with_limited_candidates() {
    let problem = Arc::new(create_clustered_problem());
    let start = create_tour(&[0, 5, 1, 6, 2, 7, 3, 8, 4, 9]);
    let start_length = problem.tour_length(&start);

    for candidates in
        [CandidateEdges::nearest_neighbors(&problem, 2), CandidateEdges::all_neighbors(&problem)]
    {
        let search = create_search(problem.clone(), candidates);
        let improved = search.improve_tour(start.clone(), None);

        assert_valid_permutation(&improved, 10);
        assert!(problem.tour_length(&improved) <= start_length);
    }
}

#[test]
fn can_avoid_incumbent_edges_on_first_break() {
    let problem = Arc::new(create_square_problem());
    let search = create_search(problem.clone(), CandidateEdges::all_neighbors(&problem));
    let incumbent = create_tour(&[0, 1, 2, 3]);

    // the improvement still happens, only the first broken edge choice is restricted
    let improved = search.improve_tour(create_tour(&[0, 2, 1, 3]), Some(&incumbent));

    assert_valid_permutation(&improved, 4);
    assert_eq!(problem.tour_length(&improved), 4);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn can_improve_arbitrary_instances((dimension, weights, start) in arbitrary_instance()) {
        let mut matrix = vec![0; dimension * dimension];
        let mut weights = weights.into_iter();
        for from in 0..dimension {
            for to in (from + 1)..dimension {
                let weight = weights.next().unwrap();
                matrix[from * dimension + to] = weight;
                matrix[to * dimension + from] = weight;
            }
        }

        let problem = Arc::new(Problem::new(dimension, matrix).unwrap());
        let start = Tour::new(start).unwrap();
        let start_length = problem.tour_length(&start);

        let search = create_search(problem.clone(), CandidateEdges::nearest_neighbors(&problem, 5));
        let improved = search.improve_tour(start, None);

        assert_valid_permutation(&improved, dimension);
        prop_assert!(problem.tour_length(&improved) <= start_length);
    }
}

prop_compose! {
    fn arbitrary_instance()(dimension in 4_usize..9)(
        dimension in Just(dimension),
        weights in prop::collection::vec(1_u64..50, dimension * (dimension - 1) / 2),
        start in Just((0..dimension).collect::<Vec<_>>()).prop_shuffle(),
    ) -> (usize, Vec<u64>, Vec<usize>) {
        (dimension, weights, start)
    }
}
