//! langlint CLI - display-geometry validation for firmware lang files
//!
//! This is the main entry point for the langlint binary: it parses the
//! command line, wires up color and logging once at startup, and runs the
//! check. Diagnostics never change the exit status; structural failures
//! exit non-zero.

mod cli;
mod error;
mod handlers;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use logging::LoggingConfig;
use output::Reporter;
use std::process;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_env();
    if let Err(e) = logging::init_logging(logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let mut reporter = Reporter::new(cli.use_color(), cli.no_warning, cli.json, cli.quiet);

    match handlers::handle_check(&cli, &mut reporter) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            eprintln!("\nFor more information, try '--help'");
            process::exit(e.exit_code());
        }
    }
}
