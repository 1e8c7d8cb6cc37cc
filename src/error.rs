use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError
{
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("{0}")]
    Usage(String),

    #[error("failed to open log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}

impl AppError
{
    pub fn usage(message: impl Into<String>) -> Self
    {
        Self::Usage(message.into())
    }
}
