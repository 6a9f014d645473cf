//! Run configuration
//!
//! Defaults match the site layout: content in `_content`, staged copy in
//! `_content_redirects`, collections `blog` and `projects`. A YAML file can
//! override any field; command-line flags are applied on top by the binary.

use crate::error::{RedirectError, Result};
use crate::io::fs::resolve;
use crate::io::Stager;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE: &str = "_content";
pub const DEFAULT_DEST: &str = "_content_redirects";
pub const MARKER_FILENAME: &str = ".redirects-generated";
pub const DEFAULT_COLLECTIONS: [&str; 2] = ["blog", "projects"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base directory for relative `source` and `dest`
    pub root: PathBuf,
    pub source: PathBuf,
    pub dest: PathBuf,
    /// File whose presence marks `dest` as safe to delete
    pub marker: String,
    /// Collection names, each stored in a `_<name>` subdirectory
    pub collections: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source: PathBuf::from(DEFAULT_SOURCE),
            dest: PathBuf::from(DEFAULT_DEST),
            marker: MARKER_FILENAME.to_string(),
            collections: DEFAULT_COLLECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load a YAML configuration file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| RedirectError::io(path, e))?;
        Self::from_yaml(&text).map_err(|e| RedirectError::config(path, e))
    }

    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    pub fn source_dir(&self) -> PathBuf {
        resolve(&self.root, &self.source)
    }

    pub fn dest_dir(&self) -> PathBuf {
        resolve(&self.root, &self.dest)
    }

    /// `(name, directory)` for every collection under `base`
    pub fn collection_dirs(&self, base: &Path) -> Vec<(String, PathBuf)> {
        self.collections
            .iter()
            .map(|name| (name.clone(), base.join(format!("_{name}"))))
            .collect()
    }

    pub fn stager(&self) -> Stager {
        Stager::new(
            self.source_dir(),
            self.dest_dir(),
            self.marker.clone(),
            self.collections.clone(),
        )
    }
}
