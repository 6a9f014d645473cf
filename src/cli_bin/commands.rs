//! Bridges parsed arguments to the library run

use crate::cli_bin::args::Cli;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::debug;
use redirectmatter::{run, Config, Policy, RedirectError};

/// Merge the configuration file (if any) with command-line overrides
pub fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if let Some(dest) = &cli.dest {
        config.dest = dest.clone();
    }
    Ok(config)
}

/// Pick the edit policy from --today / --no-schedule
pub fn build_policy(cli: &Cli) -> Result<Policy> {
    if cli.no_schedule {
        return Ok(Policy::always_redirect());
    }
    match &cli.today {
        Some(raw) => {
            let today = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| RedirectError::invalid_date(raw))?;
            Ok(Policy::scheduled(today))
        }
        None => Ok(Policy::scheduled_today()),
    }
}

/// Execute the run and print its summary line
pub fn redirect_command(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let policy = build_policy(cli)?;
    debug!("running with {config:?} and {policy:?}");

    let summary = run(&config, &policy).context("redirect generation failed")?;
    if !cli.quiet {
        println!("{summary}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["redirectmatter", "--root", "/site", "--dest", "/tmp/out"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.source_dir(), PathBuf::from("/site/_content"));
        assert_eq!(config.dest_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_policy_from_flags() {
        let cli = Cli::parse_from(["redirectmatter", "--today", "2024-03-04"]);
        assert_eq!(
            build_policy(&cli).unwrap().as_of(),
            NaiveDate::from_ymd_opt(2024, 3, 4)
        );

        let cli = Cli::parse_from(["redirectmatter", "--no-schedule"]);
        assert_eq!(build_policy(&cli).unwrap().as_of(), None);

        let cli = Cli::parse_from(["redirectmatter", "--today", "March"]);
        assert!(build_policy(&cli).is_err());
    }
}
