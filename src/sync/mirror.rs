//! Directory mirroring
//!
//! Mirrors a source tree onto a destination: missing directories are
//! created, colliding files are overwritten, and nothing in the destination
//! is ever deleted. A failure part-way through leaves already copied files
//! in place.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, SetupError};

/// Counters for a completed mirror
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MirrorStats {
    /// Regular files written to the destination
    pub files_copied: usize,
    /// Directories that did not exist before the mirror
    pub dirs_created: usize,
    /// Total bytes written
    pub bytes_copied: u64,
}

/// Recursively mirror `source` into `destination`
///
/// A missing `source` yields [`SetupError::NotFound`] and a `source` that is
/// not a directory yields [`SetupError::Io`], both before anything is
/// written. Entries are visited in file-name order. Symlinks are followed;
/// entries that are neither files nor directories are skipped.
pub fn mirror_dir(source: &Path, destination: &Path) -> Result<MirrorStats> {
    if !source.exists() {
        return Err(SetupError::NotFound {
            path: source.to_path_buf(),
        });
    }
    if !source.is_dir() {
        return Err(SetupError::io(
            source,
            io::Error::other("source is not a directory"),
        ));
    }

    let mut stats = MirrorStats::default();
    ensure_dir(destination, &mut stats)?;

    for entry in WalkDir::new(source)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| walk_error(source, err))?;

        // WalkDir only yields paths below `source`
        let relative = match entry.path().strip_prefix(source) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let target = destination.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            ensure_dir(&target, &mut stats)?;
        } else if file_type.is_file() {
            let bytes = fs::copy(entry.path(), &target)
                .map_err(|err| SetupError::io(&target, err))?;
            stats.files_copied += 1;
            stats.bytes_copied += bytes;
        } else {
            debug!(path = %entry.path().display(), "skipping special file");
        }
    }

    debug!(
        source = %source.display(),
        destination = %destination.display(),
        files = stats.files_copied,
        dirs = stats.dirs_created,
        bytes = stats.bytes_copied,
        "mirrored directory"
    );

    Ok(stats)
}

/// Copy a single file, creating the destination's parent directory
///
/// Returns the number of bytes copied. A missing `source` yields
/// [`SetupError::NotFound`] and nothing is written; a `source` that exists
/// but is not a regular file fails as [`SetupError::Io`].
pub fn copy_file(source: &Path, destination: &Path) -> Result<u64> {
    if !source.exists() {
        return Err(SetupError::NotFound {
            path: source.to_path_buf(),
        });
    }

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| SetupError::io(parent, err))?;
        }
    }

    let bytes =
        fs::copy(source, destination).map_err(|err| SetupError::io(destination, err))?;
    debug!(
        source = %source.display(),
        destination = %destination.display(),
        bytes,
        "copied file"
    );
    Ok(bytes)
}

fn ensure_dir(path: &Path, stats: &mut MirrorStats) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|err| SetupError::io(path, err))?;
    stats.dirs_created += 1;
    Ok(())
}

fn walk_error(source: &Path, err: walkdir::Error) -> SetupError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source.to_path_buf());
    let io_err = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    SetupError::io(path, io_err)
}
