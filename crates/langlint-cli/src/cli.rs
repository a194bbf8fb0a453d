//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::Parser;
use is_terminal::IsTerminal;

/// langlint - check firmware lang files against their display geometry
///
/// Parses a lang file in 4-line frames, reconstructs how every string wraps
/// on the target display, and reports translations that overflow the
/// declared geometry, drift in punctuation against the source, look
/// truncated, or carry a mismatched count of % placeholders.
#[derive(Parser, Debug)]
#[command(name = "langlint", version, author, about, long_about = None)]
pub struct Cli {
    /// Language code selecting the file to check (en|cs|de|es|fr|nl|it|pl)
    #[arg(value_name = "LANG", default_value = "en")]
    pub lang: String,

    /// Disable warnings; errors still print
    #[arg(long = "no-warning")]
    pub no_warning: bool,

    /// Emit diagnostics as JSON, one object per line
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-diagnostic output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && !self.json && std::io::stdout().is_terminal()
    }

    /// Name of the lang file this invocation validates
    pub fn lang_file_name(&self) -> String {
        if self.lang == "en" {
            "lang_en.txt".to_string()
        } else {
            format!("lang_en_{}.txt", self.lang)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lang_defaults_to_en() {
        let cli = Cli::parse_from(["langlint"]);
        assert_eq!(cli.lang, "en");
        assert_eq!(cli.lang_file_name(), "lang_en.txt");
    }

    #[test]
    fn test_lang_file_name_pattern() {
        let cli = Cli::parse_from(["langlint", "cs"]);
        assert_eq!(cli.lang_file_name(), "lang_en_cs.txt");

        // any string is accepted and substituted into the pattern
        let cli = Cli::parse_from(["langlint", "x-custom"]);
        assert_eq!(cli.lang_file_name(), "lang_en_x-custom.txt");
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["langlint", "-vv", "de"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["langlint", "--quiet", "de"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_no_warning_flag() {
        let cli = Cli::parse_from(["langlint", "--no-warning", "pl"]);
        assert!(cli.no_warning);
        assert_eq!(cli.lang, "pl");
    }
}
