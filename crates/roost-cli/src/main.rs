mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::parse_args();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
