//! A command line interface to the Lin-Kernighan TSP solver.

mod solve;
use self::solve::get_solve_app;
use self::solve::run_solve;

extern crate clap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::process;

fn main() {
    let matches = get_solve_app().get_matches();
    run_solve(&matches);
}

fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| {
        eprintln!("Cannot open {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("Cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}
