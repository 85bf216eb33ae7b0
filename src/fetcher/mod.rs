//! Hub snapshot download
//!
//! Thin wrapper over the `hf-hub` sync client. The client owns caching,
//! retries and resume; this module prepares the destination directory and
//! materializes the cached files there as real files (no symlinks).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hf_hub::api::sync::ApiBuilder;
use hf_hub::{Repo, RepoType};
use tracing::{debug, info};

use crate::error::{FetchError, FetchResult};

/// Immutable description of one download run.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// Hub repository identifier (e.g. `meta-llama/Llama-2-7b-hf`)
    pub model_id: String,
    /// Local directory the snapshot is materialized into
    pub save_path: PathBuf,
    /// Repository revision (branch, tag, or commit hash)
    pub revision: String,
    /// Access token for gated/private repositories
    pub token: Option<String>,
}

/// Downloads a full repository snapshot described by a [`DownloadRequest`].
pub struct Fetcher {
    request: DownloadRequest,
}

impl Fetcher {
    /// Creates a fetcher for the given request.
    pub fn new(request: DownloadRequest) -> Self {
        Self { request }
    }

    /// Downloads every file of the repository into the destination directory.
    ///
    /// Files go through the hub client's cache first (which resumes partial
    /// transfers on its own), then are hard-linked or copied into
    /// `save_path`. Returns the resolved local path on success.
    pub fn fetch_snapshot(&self) -> FetchResult<PathBuf> {
        let repo_id = &self.request.model_id;

        let api = ApiBuilder::new()
            .with_token(self.request.token.clone())
            .with_progress(true)
            .build()
            .map_err(|e| FetchError::download(repo_id, e))?;

        let repo = Repo::with_revision(
            repo_id.clone(),
            RepoType::Model,
            self.request.revision.clone(),
        );
        let handle = api.repo(repo);

        let repo_info = handle
            .info()
            .map_err(|e| FetchError::download(repo_id, e))?;
        info!(
            "repository {} ({}) lists {} files",
            repo_id,
            self.request.revision,
            repo_info.siblings.len()
        );

        for sibling in &repo_info.siblings {
            debug!("fetching {}", sibling.rfilename);
            let cached = handle
                .get(&sibling.rfilename)
                .map_err(|e| FetchError::download(repo_id, e))?;
            materialize(&cached, &self.request.save_path.join(&sibling.rfilename))?;
        }

        Ok(self.request.save_path.clone())
    }
}

/// Creates the destination directory and all missing parents.
///
/// Idempotent. Fails with a filesystem error when the path already exists
/// as a non-directory or cannot be created.
pub fn ensure_directory(path: &Path) -> FetchResult<()> {
    if path.exists() && !path.is_dir() {
        return Err(FetchError::filesystem(
            path,
            io::Error::new(
                io::ErrorKind::AlreadyExists,
                "path exists and is not a directory",
            ),
        ));
    }
    fs::create_dir_all(path).map_err(|e| FetchError::filesystem(path, e))
}

/// Places a cached file at its destination as a real file.
///
/// Hard-links out of the cache when the filesystem allows it, otherwise
/// copies. An existing destination file is replaced.
fn materialize(cached: &Path, local: &Path) -> FetchResult<()> {
    if let Some(parent) = local.parent() {
        fs::create_dir_all(parent).map_err(|e| FetchError::filesystem(parent, e))?;
    }
    if local.exists() {
        fs::remove_file(local).map_err(|e| FetchError::filesystem(local, e))?;
    }
    if fs::hard_link(cached, local).is_err() {
        fs::copy(cached, local).map_err(|e| FetchError::filesystem(local, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_directory_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("models").join("llama2-7b");

        ensure_directory(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");

        ensure_directory(&target).unwrap();
        ensure_directory(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_directory_rejects_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("collision");
        fs::write(&target, b"not a directory").unwrap();

        let error = ensure_directory(&target).unwrap_err();
        assert!(matches!(error, FetchError::Filesystem { .. }));
        assert!(error.to_string().contains("not a directory"));
    }

    #[test]
    fn test_materialize_copies_into_nested_path() {
        let dir = tempfile::tempdir().unwrap();
        let cached = dir.path().join("cached.bin");
        fs::write(&cached, b"weights").unwrap();

        let local = dir.path().join("out").join("sub").join("model.bin");
        materialize(&cached, &local).unwrap();
        assert_eq!(fs::read(&local).unwrap(), b"weights");
    }

    #[test]
    fn test_materialize_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cached = dir.path().join("cached.bin");
        fs::write(&cached, b"new").unwrap();

        let local = dir.path().join("model.bin");
        fs::write(&local, b"stale").unwrap();
        materialize(&cached, &local).unwrap();
        assert_eq!(fs::read(&local).unwrap(), b"new");
    }

    #[test]
    #[ignore = "requires internet access"]
    fn test_fetch_snapshot_tiny_repo() {
        let dir = tempfile::tempdir().unwrap();
        let request = DownloadRequest {
            model_id: "hf-internal-testing/tiny-random-bert".to_string(),
            save_path: dir.path().join("out"),
            revision: "main".to_string(),
            token: None,
        };

        ensure_directory(&request.save_path).unwrap();
        let resolved = Fetcher::new(request).fetch_snapshot().unwrap();
        assert!(resolved.join("config.json").is_file());
    }
}
