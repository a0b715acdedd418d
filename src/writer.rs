use crate::error::{BalanceError, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, instrument, warn};

// Function to write the whole buffer, returning how many bytes made it out
fn write_buffer(file: &mut File, buffer: &[u8]) -> io::Result<usize> {
    let mut written = 0;
    while written < buffer.len() {
        match file.write(&buffer[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("Write stopped after {} bytes: {}", written, e);
                break;
            }
        }
    }
    file.flush()?;
    Ok(written)
}

/// Deletes the file at `path` and writes `buffer` in its place.
///
/// There is no atomicity across the two steps. If the delete succeeds and
/// the write fails, the original contents are lost.
#[instrument(skip(buffer), fields(len = buffer.len()))]
pub fn rewrite(path: &Path, buffer: &[u8]) -> Result<usize> {
    fs::remove_file(path).map_err(|source| BalanceError::Delete {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Removed {}", path.display());

    let mut file = File::create(path).map_err(|source| {
        warn!("{} was deleted but could not be recreated", path.display());
        BalanceError::Create {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let written = write_buffer(&mut file, buffer).map_err(|source| BalanceError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    if written == 0 || written < buffer.len() {
        warn!(
            "{} was deleted and only {} of {} bytes were written back",
            path.display(),
            written,
            buffer.len()
        );
        return Err(BalanceError::Write {
            path: path.to_path_buf(),
            expected: buffer.len(),
            written,
        });
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rewrite_replaces_contents() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("data.bin");
        fs::write(&file, vec![0xFFu8; 8]).unwrap();

        let written = rewrite(&file, &[1, 0, 2, 0, 3, 0, 4, 0]).unwrap();
        assert_eq!(written, 8);
        assert_eq!(fs::read(&file).unwrap(), vec![1, 0, 2, 0, 3, 0, 4, 0]);
    }

    #[test]
    fn test_rewrite_missing_file_fails_on_delete() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("gone.bin");

        assert!(matches!(
            rewrite(&file, &[1, 2, 3]),
            Err(BalanceError::Delete { .. })
        ));
        assert!(!file.exists());
    }

    #[test]
    fn test_rewrite_directory_fails_on_delete() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        assert!(matches!(
            rewrite(&sub, &[1, 2, 3]),
            Err(BalanceError::Delete { .. })
        ));
        assert!(sub.is_dir());
    }

    #[test]
    fn test_rewrite_empty_buffer_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("data.bin");
        fs::write(&file, b"x").unwrap();

        match rewrite(&file, &[]) {
            Err(BalanceError::Write {
                expected, written, ..
            }) => {
                assert_eq!(expected, 0);
                assert_eq!(written, 0);
            }
            other => panic!("Expected Write error, got {:?}", other),
        }
    }
}
