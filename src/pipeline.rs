use crate::error::{BalanceError, Result};
use crate::{corruptor, loader, path, writer};
use rand::Rng;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub file_name: String,
    pub size: usize,
    pub zeroed: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The file {} is now perfectly balanced, as all things should be.",
            self.file_name
        )?;
        write!(
            f,
            "{} bytes have been sacrificed for the sake of balance in the Multiverse",
            self.zeroed
        )
    }
}

/// Resolves, loads, corrupts and rewrites the file at `input`.
///
/// The first failing stage aborts the run.
#[instrument(skip(rng))]
pub fn run<R: Rng + ?Sized>(input: &Path, rng: &mut R) -> Result<Report> {
    let resolved = path::resolve(input)?;
    info!("Balancing {}", resolved.display());

    let mut buffer = loader::load(&resolved)?;
    let size = buffer.len();
    info!("Loaded {} bytes", size);

    let zeroed = corruptor::corrupt(&mut buffer, rng);
    let quota = corruptor::quota(size);
    if zeroed < quota {
        return Err(BalanceError::Unbalanced { zeroed, quota });
    }
    info!("Zeroed {} bytes", zeroed);

    writer::rewrite(&resolved, &buffer)?;
    info!("Rewrote {}", resolved.display());

    Ok(Report {
        file_name: path::file_name(&resolved),
        path: resolved,
        size,
        zeroed,
    })
}
