//! Per-request scratch directories with guaranteed cleanup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Ephemeral directory owned by exactly one fetch request.
///
/// The directory is deleted exactly once: explicitly through
/// [`ScratchDir::remove`], or implicitly when the value is dropped.
/// Callers that stream a contained file keep the guard alive until the
/// response body has been fully written, which defers deletion past the
/// handoff; error paths drop the guard before the error propagates, so a
/// failed request never leaves its directory behind.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Creates a fresh, uniquely named directory: under `parent` when
    /// given, otherwise under the system temp dir. Never reused across
    /// requests.
    pub fn allocate(parent: Option<&Path>) -> io::Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("mdp-");
        let dir = match parent {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                builder.tempdir_in(parent)?
            }
            None => builder.tempdir()?,
        };
        tracing::debug!(path = %dir.path().display(), "allocated scratch dir");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the first regular file in the directory, if any. With
    /// several files present (e.g. separate video and audio parts that
    /// were never merged) the choice is arbitrary.
    pub fn first_file(&self) -> io::Result<Option<PathBuf>> {
        for entry in fs::read_dir(self.dir.path())? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                return Ok(Some(entry.path()));
            }
        }
        Ok(None)
    }

    /// Deletes the directory now, reporting any filesystem error.
    /// Dropping the value deletes it too, swallowing errors.
    pub fn remove(self) -> io::Result<()> {
        self.dir.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_creates_and_drop_removes() {
        let scratch = ScratchDir::allocate(None).unwrap();
        let path = scratch.path().to_path_buf();
        assert!(path.is_dir());
        drop(scratch);
        assert!(!path.exists());
    }

    #[test]
    fn allocate_under_parent() {
        let parent = tempfile::tempdir().unwrap();
        let scratch = ScratchDir::allocate(Some(parent.path())).unwrap();
        assert!(scratch.path().starts_with(parent.path()));
        scratch.remove().unwrap();
        assert_eq!(fs::read_dir(parent.path()).unwrap().count(), 0);
    }

    #[test]
    fn two_allocations_never_share_a_path() {
        let a = ScratchDir::allocate(None).unwrap();
        let b = ScratchDir::allocate(None).unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn first_file_empty_dir() {
        let scratch = ScratchDir::allocate(None).unwrap();
        assert!(scratch.first_file().unwrap().is_none());
    }

    #[test]
    fn first_file_finds_a_file_and_skips_subdirs() {
        let scratch = ScratchDir::allocate(None).unwrap();
        fs::create_dir(scratch.path().join("fragments")).unwrap();
        let file = scratch.path().join("clip.mp4");
        fs::write(&file, b"x").unwrap();
        assert_eq!(scratch.first_file().unwrap(), Some(file));
    }

    #[test]
    fn remove_reports_success_once() {
        let scratch = ScratchDir::allocate(None).unwrap();
        let path = scratch.path().to_path_buf();
        scratch.remove().unwrap();
        assert!(!path.exists());
    }
}
