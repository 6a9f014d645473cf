//! Disposable working copy of the content tree
//!
//! All edits happen in the destination, which is only ever deleted or
//! recreated when it carries the marker file written here.

use crate::error::{RedirectError, Result};
use crate::io::fs::absolute;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Contents of the marker file
const MARKER_CONTENT: &str = "generated\n";

/// Outcome of [`Stager::prepare`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staging {
    /// Destination is a fresh copy of the source
    Copied,
    /// Source directory does not exist, nothing was touched
    MissingSource,
}

/// Copies a source tree into a marker-guarded destination
#[derive(Debug, Clone)]
pub struct Stager {
    source: PathBuf,
    dest: PathBuf,
    marker: String,
    collections: Vec<String>,
}

impl Stager {
    pub fn new(
        source: impl Into<PathBuf>,
        dest: impl Into<PathBuf>,
        marker: impl Into<String>,
        collections: Vec<String>,
    ) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            marker: marker.into(),
            collections,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    fn marker_path(&self) -> PathBuf {
        self.dest.join(&self.marker)
    }

    fn has_marker(&self) -> bool {
        self.marker_path().is_file()
    }

    /// Replace the destination with a full copy of the source
    ///
    /// Fails before touching anything when both paths are the same, and
    /// refuses to delete a destination that lacks the marker file.
    pub fn prepare(&self) -> Result<Staging> {
        if absolute(&self.source)? == absolute(&self.dest)? {
            return Err(RedirectError::same_directory(&self.dest));
        }
        if !self.source.is_dir() {
            return Ok(Staging::MissingSource);
        }
        if self.dest.exists() {
            if !self.has_marker() {
                return Err(RedirectError::missing_marker(&self.dest, &self.marker));
            }
            remove_dir_all(&self.dest)?;
        }

        info!("copying {} to {}", self.source.display(), self.dest.display());
        copy_tree(&self.source, &self.dest)?;
        self.write_marker()?;
        Ok(Staging::Copied)
    }

    /// Create an empty, marked destination with one directory per collection
    ///
    /// Returns `false` without changing anything if the destination exists
    /// but was not generated by us.
    pub fn ensure_empty(&self) -> Result<bool> {
        if self.dest.exists() {
            if !self.has_marker() {
                warn!(
                    "{} exists without {}, leaving it alone",
                    self.dest.display(),
                    self.marker
                );
                return Ok(false);
            }
            remove_dir_all(&self.dest)?;
        }

        create_dir_all(&self.dest)?;
        self.write_marker()?;
        for name in &self.collections {
            create_dir_all(&self.dest.join(format!("_{name}")))?;
        }
        info!("created empty {}", self.dest.display());
        Ok(true)
    }

    fn write_marker(&self) -> Result<()> {
        let path = self.marker_path();
        fs::write(&path, MARKER_CONTENT).map_err(|e| RedirectError::io(path, e))
    }
}

fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| RedirectError::io(path, e))
}

fn remove_dir_all(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|e| RedirectError::io(path, e))
}

/// Recursively copy `from` into a new directory `to`, following symlinks
fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| RedirectError::io(entry.path(), std::io::Error::other(e)))?;
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| RedirectError::io(entry.path(), e))?;
        }
    }
    Ok(())
}
