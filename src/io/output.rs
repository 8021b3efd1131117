use std::path::Path;

use serde::Serialize;

use crate::error::CastnetError;

/// Write a value as pretty-printed JSON, creating the parent directory when
/// it does not exist yet.
///
/// serde_json leaves non-ASCII characters unescaped, which the interchange
/// format requires.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), CastnetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| CastnetError::FileAccess {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let file = std::fs::File::create(path).map_err(|source| CastnetError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}
