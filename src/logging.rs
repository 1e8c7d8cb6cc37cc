use crate::error::AppError;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const FILTER_ENV: &str = "PAIRS_LOG";
const DEFAULT_FILTER: &str = "info";

/// The game owns the terminal, so logs only ever go to a file. Without a
/// path no subscriber is installed and every event is dropped.
pub fn init(path: Option<&Path>) -> Result<(), AppError>
{
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
