//! End-to-end run: stage the content tree, then edit the staged copy

use crate::config::Config;
use crate::core::Policy;
use crate::error::Result;
use crate::io::fs::display_relative;
use crate::io::{process_collection, Staging};
use log::info;
use std::fmt;

/// What a run did, rendered as the one-line report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// No source tree; an empty destination was created
    CreatedEmpty { source: String, dest: String },
    /// No source tree and a foreign destination; nothing was done
    Skipped { dest: String, marker: String },
    NoChanges { dest: String },
    Updated { count: usize, dest: String },
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreatedEmpty { source, dest } => {
                write!(f, "redirect: {source} missing; created empty {dest}")
            }
            Self::Skipped { dest, marker } => {
                write!(f, "redirect: skipped because {dest} exists without {marker}")
            }
            Self::NoChanges { dest } => write!(f, "redirect: no changes in {dest}"),
            Self::Updated { count, dest } => {
                write!(f, "redirect: updated {count} file(s) in {dest}")
            }
        }
    }
}

pub fn run(config: &Config, policy: &Policy) -> Result<Summary> {
    let stager = config.stager();
    let rel_dest = display_relative(&config.root, stager.dest());

    if stager.prepare()? == Staging::MissingSource {
        info!("{} does not exist", stager.source().display());
        return Ok(if stager.ensure_empty()? {
            Summary::CreatedEmpty {
                source: display_relative(&config.root, stager.source()),
                dest: rel_dest,
            }
        } else {
            Summary::Skipped {
                dest: stager.dest().display().to_string(),
                marker: config.marker.clone(),
            }
        });
    }

    if let Some(today) = policy.as_of() {
        info!("treating entries dated after {today} as scheduled");
    }

    let mut total = 0;
    for (name, dir) in config.collection_dirs(stager.dest()) {
        total += process_collection(&name, &dir, policy)?;
    }

    Ok(if total == 0 {
        Summary::NoChanges { dest: rel_dest }
    } else {
        Summary::Updated {
            count: total,
            dest: rel_dest,
        }
    })
}
