//! Calorie estimator command line
//!
//! ```bash
//! estimate --weight 70 --sex Male --activity Low     # prints 1334
//! estimate --weight 60 --sex Nainen --activity Korkea --json
//! estimate --list-levels
//! ```

mod commands;
mod logging;
mod output;

use commands::CommandLine;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match CommandLine::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are reported through the error path too
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose);

    match commands::run(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
