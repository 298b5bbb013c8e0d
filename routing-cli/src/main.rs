//! A command line interface to route optimization library.
//!

mod commands;

use self::cli::{get_app, run_subcommand};

fn main() {
    run_subcommand(get_app().get_matches());
}

mod cli {
    use super::commands::create_write_buffer;
    use super::commands::optimize::{get_optimize_app, run_optimize};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Route Optimization")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to route optimization engine")
            .subcommand(get_optimize_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("optimize", optimize_matches)) => run_optimize(optimize_matches, create_write_buffer),
            _ => {
                eprintln!("No subcommand was used. Use -h to print help information.");
                process::exit(1);
            }
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
