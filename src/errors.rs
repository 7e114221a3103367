//! Unified application error type.
//! All modules (core, storage, client, cli) return AppError so that the
//! top-level runner has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Config errors (fatal, before any fetch)
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Remote source (per record, recovered)
    // ---------------------------
    #[error("Malformed activity record: {0}")]
    MalformedRecord(String),

    // ---------------------------
    // Ledger errors
    // ---------------------------
    #[error("Ledger shape error: {0}")]
    LedgerShape(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
