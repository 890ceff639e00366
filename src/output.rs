//! Writing generated files to disk.

use crate::error::BracketError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder as TempFileBuilder;

/// Writes `contents` to `path`.
///
/// A new file is created directly, so it gets the usual permissions for the
/// process. An existing file is replaced through a temporary file next to it
/// that takes over the old file's permissions before being renamed over it,
/// so readers never see it half written.
pub fn write_output(path: &Path, contents: &str) -> Result<(), BracketError> {
    match fs::metadata(path) {
        Ok(metadata) => replace_atomically(path, contents, metadata.permissions())?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::write(path, contents).map_err(BracketError::io(path))?;
        }
        Err(err) => return Err(BracketError::io(path)(err)),
    }

    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn replace_atomically(
    path: &Path,
    contents: &str,
    permissions: fs::Permissions,
) -> Result<(), BracketError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = TempFileBuilder::new()
        .prefix(".wfsports-")
        .suffix(".tmp")
        .tempfile_in(parent_dir)
        .map_err(BracketError::io(parent_dir))?;

    temp_file
        .write_all(contents.as_bytes())
        .map_err(BracketError::io(temp_file.path()))?;

    temp_file
        .as_file()
        .set_permissions(permissions)
        .map_err(BracketError::io(temp_file.path()))?;

    temp_file
        .persist(path)
        .map_err(|err| BracketError::Io {
            path: path.to_path_buf(),
            source: err.error,
        })?;

    Ok(())
}
