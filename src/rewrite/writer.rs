use crate::error::{Result, StripError};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Sibling path used while writing `path` atomically
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lombok-strip.tmp");
    path.with_file_name(name)
}

/// Overwrite `path` with `contents`.
///
/// With `atomic` set the new contents go to a sibling temp file that is then
/// renamed over the target, so the target holds either the old or the new
/// contents. The temp file inherits the target's permissions.
///
/// Both modes refuse a target that is read-only or cannot be opened for
/// writing, leaving it untouched. A rename would otherwise replace it.
pub fn write_contents(path: &Path, contents: &str, atomic: bool) -> Result<()> {
    let write_err = |source| StripError::Write {
        path: path.to_path_buf(),
        source,
    };

    let permissions = fs::metadata(path).map_err(write_err)?.permissions();
    if permissions.readonly() {
        return Err(write_err(io::Error::from(io::ErrorKind::PermissionDenied)));
    }

    if !atomic {
        return fs::write(path, contents).map_err(write_err);
    }

    OpenOptions::new().write(true).open(path).map_err(write_err)?;

    let temp_path = temp_path_for(path);

    let result = fs::write(&temp_path, contents)
        .and_then(|_| fs::set_permissions(&temp_path, permissions))
        .and_then(|_| fs::rename(&temp_path, path));

    if let Err(source) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(source));
    }

    Ok(())
}
