//! Command-line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "redirectmatter",
    version,
    about = "Generate redirect_from entries without modifying source content",
    long_about = "Copies the content tree into a disposable destination guarded by a marker \
                  file, then adds /<collection>/<slug>/ to redirect_from in every Markdown \
                  file. Entries dated in the future are marked published: false and lose \
                  their redirect_from instead."
)]
pub struct Cli {
    /// Source collections directory [default: _content]
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination collections directory [default: _content_redirects]
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Base directory for relative paths [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Treat this UTC date as today (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", conflicts_with = "no_schedule")]
    pub today: Option<String>,

    /// Ignore publish dates and always add the canonical redirect
    #[arg(long)]
    pub no_schedule: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Default log level implied by -v/-q
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
