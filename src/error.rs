use std::path::PathBuf;
use std::process::ExitStatus;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// a path the run depends on is missing. Raised before anything is spawned or written.
    #[error("{what} must be a valid path, not {path:?}")]
    MissingPath { what: &'static str, path: PathBuf },
    #[error("run mode must be either 'queue' or 'local', not {0:?}")]
    InvalidRunMode(String),
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("`{command}` failed with {status}")]
    Execution { command: String, status: ExitStatus },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed graph file, line {line}: {content:?}")]
    Parse { line: usize, content: String },
    #[error("results table could not be (de)serialized: {0}")]
    Table(#[from] bincode::Error),
    #[error("plotting failed: {0}")]
    Plot(String),
}

impl Error {
    /// configuration errors are the ones detected before any work began
    pub fn is_config(&self) -> bool {
        matches!(self, Error::MissingPath{..} | Error::InvalidRunMode(_) | Error::InvalidParameter{..})
    }
}

/// precondition check shared by the driver entry points
pub(crate) fn require_exists(what: &'static str, path: &std::path::Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::MissingPath { what, path: path.to_path_buf() });
    }
    Ok(())
}

/// like `require_exists`, but the path has to be a regular file (or a link to one)
pub(crate) fn require_file(what: &'static str, path: &std::path::Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::MissingPath { what, path: path.to_path_buf() });
    }
    Ok(())
}
