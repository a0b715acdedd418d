use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BalanceError>;

// One variant per failing stage. The Display text is what the user sees.
#[derive(Error, Debug)]
pub enum BalanceError {
    #[error("File not found")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not load file contents")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not load file contents")]
    ShortRead { expected: usize, read: usize },

    #[error("Could not randomly delete 50% of the bytes in the file. Balance could not be established")]
    Unbalanced { zeroed: usize, quota: usize },

    #[error("Could not delete file")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write file contents")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write file contents")]
    Write {
        path: PathBuf,
        expected: usize,
        written: usize,
    },
}

impl BalanceError {
    /// Longer description for the log, including sizes and paths.
    pub fn detail(&self) -> String {
        match self {
            BalanceError::NotFound { path, source } => {
                format!("cannot resolve {}: {}", path.display(), source)
            }
            BalanceError::Open { path, source } => {
                format!("cannot open {}: {}", path.display(), source)
            }
            BalanceError::ShortRead { expected, read } => {
                format!("read {} of {} bytes", read, expected)
            }
            BalanceError::Unbalanced { zeroed, quota } => {
                format!("zeroed {} bytes, needed {}", zeroed, quota)
            }
            BalanceError::Delete { path, source } => {
                format!("cannot remove {}: {}", path.display(), source)
            }
            BalanceError::Create { path, source } => {
                format!("cannot create {}: {}", path.display(), source)
            }
            BalanceError::Write {
                path,
                expected,
                written,
            } => format!(
                "wrote {} of {} bytes to {}",
                written,
                expected,
                path.display()
            ),
        }
    }
}
