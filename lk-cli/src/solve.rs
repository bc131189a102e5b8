#[cfg(test)]
#[path = "../tests/unit/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{App, Arg, ArgMatches};
use lk_core::prelude::*;
use lk_core::utils::Timer;
use lk_tsplib::{TsplibProblem, TsplibSolution};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

pub const PROBLEM_ARG_NAME: &str = "PROBLEM";
pub const CANDIDATES_ARG_NAME: &str = "candidates";
pub const NEIGHBORS_ARG_NAME: &str = "neighbors";
pub const TRIALS_ARG_NAME: &str = "trials";
pub const OPTIMUM_ARG_NAME: &str = "optimum";
pub const ERROR_ARG_NAME: &str = "error";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const LOG_ARG_NAME: &str = "log";
pub const REPEATABLE_ARG_NAME: &str = "repeatable";

pub fn get_solve_app() -> App<'static, 'static> {
    App::new("Lin-Kernighan TSP Solver")
        .version("0.1")
        .about("Solves symmetric TSP instances with the Lin-Kernighan heuristic")
        .arg(Arg::with_name(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::with_name(CANDIDATES_ARG_NAME)
                .help("Specifies the candidate edge type")
                .short("c")
                .long(CANDIDATES_ARG_NAME)
                .possible_values(&["all", "nearest", "alpha", "optimized-alpha"])
                .default_value("optimized-alpha")
                .takes_value(true),
        )
        .arg(
            Arg::with_name(NEIGHBORS_ARG_NAME)
                .help("Specifies the amount of candidate neighbors per node")
                .short("k")
                .long(NEIGHBORS_ARG_NAME)
                .default_value("10")
                .takes_value(true),
        )
        .arg(
            Arg::with_name(TRIALS_ARG_NAME)
                .help("Specifies the amount of multi-start trials")
                .short("t")
                .long(TRIALS_ARG_NAME)
                .default_value("1")
                .takes_value(true),
        )
        .arg(
            Arg::with_name(OPTIMUM_ARG_NAME)
                .help("Specifies a known optimal tour length, zero disables the early exit")
                .short("o")
                .long(OPTIMUM_ARG_NAME)
                .default_value("0")
                .takes_value(true),
        )
        .arg(
            Arg::with_name(ERROR_ARG_NAME)
                .help("Specifies the acceptable relative deviation from the optimum")
                .short("e")
                .long(ERROR_ARG_NAME)
                .default_value("0.0")
                .takes_value(true),
        )
        .arg(
            Arg::with_name(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for the resulting tour")
                .short("r")
                .long(OUT_RESULT_ARG_NAME)
                .required(false)
                .takes_value(true),
        )
        .arg(Arg::with_name(LOG_ARG_NAME).help("Turns on per trial logging").long(LOG_ARG_NAME))
        .arg(
            Arg::with_name(REPEATABLE_ARG_NAME)
                .help("Uses a fixed seed random generator to make runs repeatable")
                .long(REPEATABLE_ARG_NAME),
        )
}

pub fn run_solve(matches: &ArgMatches) {
    let problem_path = matches.value_of(PROBLEM_ARG_NAME).unwrap();
    let problem_file = open_file(problem_path, "problem");

    let problem = BufReader::new(problem_file).read_tsplib().unwrap_or_else(|err| {
        eprintln!("Cannot read problem file '{problem_path}': '{err}'");
        process::exit(1);
    });

    let kind = get_candidate_kind(matches.value_of(CANDIDATES_ARG_NAME).unwrap(), parse_value(matches, NEIGHBORS_ARG_NAME));
    let config = SolverConfig {
        trials: parse_value(matches, TRIALS_ARG_NAME),
        optimum_tour_length: parse_value(matches, OPTIMUM_ARG_NAME),
        acceptable_error: parse_value(matches, ERROR_ARG_NAME),
        ..SolverConfig::default()
    };
    let environment = Arc::new(Environment::new(create_random(matches), create_logger(matches)));

    let timer = Timer::start();
    let problem = Arc::new(problem);
    let candidates = Arc::new(CandidateEdges::create(&problem, kind));
    let solver = LinKernighanSolver::new(problem.clone(), candidates, environment, config);

    let tour = solver.solve().unwrap_or_else(|err| {
        eprintln!("Cannot solve problem: '{err}'");
        process::exit(1);
    });

    eprintln!("found a tour of length {} in {}ms", problem.tour_length(&tour), timer.elapsed_millis());

    let out_file = matches.value_of(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "result"));
    let mut writer = create_write_buffer(out_file);
    let name = Path::new(problem_path).file_stem().and_then(|stem| stem.to_str()).unwrap_or("tour");

    tour.write_tsplib(&mut writer, name).unwrap_or_else(|err| {
        eprintln!("Cannot write result: '{err}'");
        process::exit(1);
    });
}

fn get_candidate_kind(name: &str, k: usize) -> CandidateEdgeKind {
    match name {
        "all" => CandidateEdgeKind::All,
        "nearest" => CandidateEdgeKind::Nearest { k },
        "alpha" => CandidateEdgeKind::AlphaNearest { k },
        _ => CandidateEdgeKind::OptimizedAlphaNearest { k },
    }
}

fn create_random(matches: &ArgMatches) -> Arc<dyn Random + Send + Sync> {
    if matches.is_present(REPEATABLE_ARG_NAME) {
        Arc::new(DefaultRandom::new_repeatable())
    } else {
        Arc::new(DefaultRandom::default())
    }
}

fn create_logger(matches: &ArgMatches) -> InfoLogger {
    if matches.is_present(LOG_ARG_NAME) {
        Arc::new(|msg: &str| eprintln!("{msg}"))
    } else {
        Arc::new(|_: &str| {})
    }
}

fn parse_value<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> T {
    let value = matches.value_of(name).unwrap();

    value.parse().unwrap_or_else(|_| {
        eprintln!("Cannot parse argument '{name}' from '{value}'");
        process::exit(1);
    })
}
