use crate::error::{BalanceError, Result};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, instrument};

// Only regular files are loaded. Directories open fine on unix and would
// report a bogus size.
fn open(path: &Path) -> Result<File> {
    let to_error = |source: io::Error| BalanceError::Open {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    if !file.metadata().map_err(to_error)?.is_file() {
        return Err(to_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok(file)
}

// Function to get the size of a file by seeking to its end
#[instrument]
pub fn file_size(path: &Path) -> Result<u64> {
    let mut file = open(path)?;
    file.seek(SeekFrom::End(0))
        .map_err(|source| BalanceError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads the whole file into a buffer of exactly its size.
///
/// Reading fewer bytes than the size is an error, and so is reading zero
/// bytes. An empty file is therefore rejected.
#[instrument]
pub fn load(path: &Path) -> Result<Vec<u8>> {
    let size = file_size(path)?;
    let size = usize::try_from(size).map_err(|e| BalanceError::Open {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    let mut file = open(path)?;
    let mut buffer = vec![0u8; size];
    let mut read = 0;
    while read < size {
        match file.read(&mut buffer[read..]) {
            Ok(0) => break,
            Ok(n) => read += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(BalanceError::Open {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    if read == 0 || read < size {
        return Err(BalanceError::ShortRead {
            expected: size,
            read,
        });
    }

    debug!("Loaded {} bytes from {}", read, path.display());
    Ok(buffer)
}
