//! Argument parsing and the run pipeline.

use clap::{value_parser, Arg, ArgAction, Command};
use roost::prelude::*;
use std::error::Error;
use std::fs;
use std::io;

/// Parsed command-line arguments.
pub(crate) struct Args {
    pub(crate) layout: String,
    pub(crate) strategy: Strategy,
    pub(crate) max_generations: u64,
    pub(crate) show_final: bool,
}

/// Parses the command-line arguments, exiting with usage on error.
pub(crate) fn parse_args() -> Args {
    let matches = Command::new("roost")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Drive a seat layout to its fixed point and count the occupied seats")
        .arg(
            Arg::new("LAYOUT")
                .help("Path to the layout file, or - to read standard input")
                .required(true),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .value_name("STRATEGY")
                .default_value("adjacent")
                .value_parser(|s: &str| s.parse::<Strategy>().map_err(|e| e.to_string()))
                .help("Neighbour strategy: adjacent (threshold 4) or visible (threshold 5)"),
        )
        .arg(
            Arg::new("max-generations")
                .long("max-generations")
                .value_name("N")
                .default_value("10000")
                .value_parser(value_parser!(u64))
                .help("Safety cap on generations before the run is declared stagnant"),
        )
        .arg(
            Arg::new("show-final")
                .long("show-final")
                .action(ArgAction::SetTrue)
                .help("Also print the stabilized layout to standard error"),
        )
        .get_matches();

    Args {
        layout: matches
            .get_one::<String>("LAYOUT")
            .expect("LAYOUT is required")
            .clone(),
        strategy: *matches
            .get_one::<Strategy>("strategy")
            .expect("strategy has a default"),
        max_generations: *matches
            .get_one::<u64>("max-generations")
            .expect("max-generations has a default"),
        show_final: matches.get_flag("show-final"),
    }
}

/// Read the layout, stabilize it, and print the occupied-seat count.
///
/// The count is the only thing written to standard output; generation
/// and timing diagnostics go to standard error.
pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let text = if args.layout == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(&args.layout)?
    };

    let config = EngineConfig {
        max_generations: args.max_generations,
    };
    let out = stabilize(&text, args.strategy, config)?;

    eprintln!(
        "{} strategy: stable after {} generations ({} cells, {} us)",
        args.strategy, out.generations, out.metrics.cell_count, out.metrics.total_us,
    );
    if args.show_final {
        eprint!("{}", out.grid);
    }
    println!("{}", occupied_seats(&out.grid));
    Ok(())
}
