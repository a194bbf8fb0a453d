//! Check command handler
//!
//! Drives the parse -> check -> render loop over the selected lang file.
//! Content findings stream through the reporter as they are produced;
//! structural failures propagate and abort the run.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::output::Reporter;
use langlint_core::{run_checks, Parser};

/// Handle the lang check
#[instrument(skip(args, reporter), fields(lang = %args.lang))]
pub fn handle_check(args: &Cli, reporter: &mut Reporter) -> Result<()> {
    let file_name = args.lang_file_name();
    info!(file = %file_name, "starting lang check");

    let path = Path::new(&file_name);
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    reporter.banner(&format!("Start {} lang-check", args.lang))?;

    let mut records = 0usize;
    let mut findings = 0usize;
    for record in Parser::from_path(path)? {
        let record = record?;
        records += 1;
        let diagnostics = run_checks(&record);
        findings += diagnostics.len();
        for diagnostic in &diagnostics {
            reporter.diagnostic(diagnostic)?;
        }
    }
    debug!(records, findings, "lang check finished");

    reporter.banner(&format!("End {} lang-check", args.lang))?;
    Ok(())
}
