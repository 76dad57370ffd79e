//! Errors raised while loading transactions or writing reports.
//!
//! Queries over a loaded store never fail; every variant here is a load or
//! output failure. A malformed input file aborts the whole load, there is no
//! partial recovery.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
