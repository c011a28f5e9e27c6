// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reading the commit message file handed to the hook.

use crate::error::MessageError;
use std::path::Path;

/// Read the commit message at `path`.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_message(path: Option<&Path>) -> Result<String, MessageError> {
    let path = path.ok_or(MessageError::ArgumentMissing)?;

    let metadata = std::fs::metadata(path).map_err(|e| {
        tracing::debug!("Cannot stat {:?}: {}", path, e);
        MessageError::FileMissing {
            path: path.to_path_buf(),
        }
    })?;

    if metadata.is_dir() {
        tracing::debug!("{:?} is not a file", path);
        return Err(MessageError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| MessageError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Read {} bytes from {:?}", bytes.len(), path);

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_argument() {
        assert!(matches!(
            read_message(None),
            Err(MessageError::ArgumentMissing)
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_message(Some(&dir.path().join("COMMIT_EDITMSG")));
        assert!(matches!(result, Err(MessageError::FileMissing { .. })));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let result = read_message(Some(dir.path()));
        assert!(matches!(result, Err(MessageError::NotAFile { .. })));
    }

    #[test]
    fn test_read_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "feat: add login flow\n").unwrap();
        assert_eq!(read_message(Some(&path)).unwrap(), "feat: add login flow\n");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, b"fix: caf\xe9").unwrap();
        let text = read_message(Some(&path)).unwrap();
        assert!(text.starts_with("fix: caf"));
    }
}
