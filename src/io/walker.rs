//! Applying the edit policy to every content file of a collection

use crate::core::{Document, Policy};
use crate::error::Result;
use crate::io::fs::{is_hidden, is_markdown, read_to_string, write};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Markdown files under `dir`, recursively, skipping hidden file names
///
/// Ordered by file name within each directory.
pub fn content_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && !is_hidden(path) && is_markdown(path) {
            files.push(path.to_owned());
        }
    }
    Ok(files)
}

/// Apply the policy to one file, rewriting it only if something changed
pub fn process_file(path: &Path, collection: &str, policy: &Policy) -> Result<bool> {
    let content = read_to_string(path)?;
    let document = Document::parse(&content);
    let Some(mut front_matter) = document.front_matter() else {
        debug!("no front matter in {}, skipping", path.display());
        return Ok(false);
    };

    let slug = front_matter.slug(path);
    if !policy.apply(&mut front_matter, collection, &slug) {
        return Ok(false);
    }

    write(path, &document.render(&front_matter))?;
    debug!("updated {}", path.display());
    Ok(true)
}

/// Process every content file of a collection directory
///
/// Returns the number of files rewritten.
pub fn process_collection(collection: &str, dir: &Path, policy: &Policy) -> Result<usize> {
    if !dir.is_dir() {
        debug!("collection {collection} has no directory at {}", dir.display());
        return Ok(0);
    }

    let mut updated = 0;
    for file in content_files(dir)? {
        if process_file(&file, collection, policy)? {
            updated += 1;
        }
    }
    debug!("collection {collection}: {updated} file(s) updated");
    Ok(updated)
}
