use super::*;
use crate::helpers::models::{assert_valid_permutation, create_ring_problem, create_square_problem};
use crate::helpers::utils::{create_collecting_logger, create_test_environment};
use crate::solver::candidates::CandidateEdgeKind;
use crate::utils::DefaultRandom;

fn create_solver(problem: Problem, kind: CandidateEdgeKind, config: SolverConfig) -> LinKernighanSolver {
    let problem = Arc::new(problem);
    let candidates = Arc::new(CandidateEdges::create(&problem, kind));

    LinKernighanSolver::new(problem, candidates, create_test_environment(), config)
}

#[test]
fn cannot_solve_without_trials() {
    let solver = create_solver(
        create_square_problem(),
        CandidateEdgeKind::All,
        SolverConfig { trials: 0, ..SolverConfig::default() },
    );

    assert!(solver.solve().is_err());
}

#[test]
fn can_solve_square_problem() {
    let solver = create_solver(
        create_square_problem(),
        CandidateEdgeKind::All,
        SolverConfig { trials: 3, ..SolverConfig::default() },
    );

    let tour = solver.solve().expect("cannot solve square problem");

    assert_valid_permutation(&tour, 4);
}

#[test]
fn can_stop_early_when_target_is_reached() {
    let problem = Arc::new(create_ring_problem(6));
    let candidates = Arc::new(CandidateEdges::create(&problem, CandidateEdgeKind::All));
    let (logger, messages) = create_collecting_logger();
    let environment = Arc::new(Environment::new(Arc::new(DefaultRandom::new_repeatable()), logger));

    let config = SolverConfig {
        trials: 1000,
        optimum_tour_length: 6,
        acceptable_error: 0.01,
        ..SolverConfig::default()
    };
    let solver = LinKernighanSolver::new(problem.clone(), candidates, environment, config);

    let tour = solver.solve().expect("cannot solve ring problem");

    assert_eq!(problem.tour_length(&tour), 6);
    let trials_run = messages.lock().unwrap().len();
    assert!(trials_run < 1000, "the driver has not stopped early, {trials_run} trials run");
}

#[test]
fn can_run_all_trials_without_target() {
    let problem = Arc::new(create_square_problem());
    let candidates = Arc::new(CandidateEdges::create(&problem, CandidateEdgeKind::All));
    let (logger, messages) = create_collecting_logger();
    let environment = Arc::new(Environment::new(Arc::new(DefaultRandom::new_repeatable()), logger));

    let config = SolverConfig { trials: 4, ..SolverConfig::default() };
    let solver = LinKernighanSolver::new(problem, candidates, environment, config);

    solver.solve().expect("cannot solve square problem");

    assert_eq!(messages.lock().unwrap().len(), 4);
}

#[test]
fn can_generate_valid_random_tours() {
    let problem = Arc::new(create_ring_problem(50));
    let solver = LinKernighanSolver::new(
        problem.clone(),
        Arc::new(CandidateEdges::nearest_neighbors(&problem, 5)),
        create_test_environment(),
        SolverConfig::default(),
    );

    let incumbent = solver.generate_random_tour(None);
    assert_valid_permutation(&incumbent, 50);

    for _ in 0..10 {
        let tour = solver.generate_random_tour(Some(&incumbent));
        assert_valid_permutation(&tour, 50);
    }
}
