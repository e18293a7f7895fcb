use clap::Parser;
use std::process;
use submissions::{Cli, OutputFormatter, SubmissionsError};

fn main() {
    let _cli = Cli::parse();
    process::exit(run());
}

fn run() -> i32 {
    let formatter = OutputFormatter::new();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(error) => {
            formatter.error(&format!("Cannot determine the current directory: {}", error));
            return 1;
        }
    };

    match submissions::run(&cwd, &formatter) {
        Ok(()) => 0,
        Err(error) => {
            formatter.print_user_friendly_error(&error);

            // Map error kinds to exit codes
            match error {
                SubmissionsError::NoSubmissions { .. } | SubmissionsError::MixedSheets { .. } => 2,
                SubmissionsError::Authentication | SubmissionsError::Connection { .. } => 4,
                SubmissionsError::Cancelled => 130,
                _ => 1,
            }
        }
    }
}
