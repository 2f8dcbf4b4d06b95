use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("failed to read {}: {source}", path.display())]
    ReadData {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid user data in {}: {source}", path.display())]
    Data {
        path: PathBuf,
        source: serde_json::Error,
    },
}
