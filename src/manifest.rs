//! Download manifest
//!
//! Enumerates the files under the destination directory after a successful
//! download and prints one line per file with its size in mebibytes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FetchError, FetchResult};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A single file found under the destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    /// Path relative to the destination directory
    pub relative_path: PathBuf,
    /// File size in bytes
    pub size_bytes: u64,
}

impl DownloadedFile {
    /// Size in mebibytes.
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB
    }
}

/// Recursively enumerates all files under `root`, ascending by path.
///
/// The whole tree is read up front and returned as one sorted list; at the
/// file counts of a model repository there is nothing to gain from
/// streaming. Pure read of filesystem state, repeatable; directories
/// themselves are not listed.
pub fn list_downloaded(root: &Path) -> FetchResult<Vec<DownloadedFile>> {
    let mut files = Vec::new();
    collect(root, root, &mut files)?;
    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(files)
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<DownloadedFile>) -> FetchResult<()> {
    let entries = fs::read_dir(dir).map_err(|e| FetchError::filesystem(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| FetchError::filesystem(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            collect(root, &path, out)?;
        } else {
            let metadata = fs::metadata(&path).map_err(|e| FetchError::filesystem(&path, e))?;
            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .to_path_buf();
            out.push(DownloadedFile {
                relative_path,
                size_bytes: metadata.len(),
            });
        }
    }
    Ok(())
}

/// Writes the manifest, one `  - <path> (<size> MB)` line per file.
pub fn report<W: Write>(out: &mut W, files: &[DownloadedFile]) -> std::io::Result<()> {
    writeln!(out, "\nDownloaded files:")?;
    for file in files {
        writeln!(
            out,
            "  - {} ({:.2} MB)",
            file.relative_path.display(),
            file.size_mb()
        )?;
    }
    Ok(())
}
