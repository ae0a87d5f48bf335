extern crate thiserror;

use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Lemma(#[from] lemma::Error),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Dataset(#[from] DatasetError),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {0}")]
    File(io::ErrorKind),
}

/// Training data errors.
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("Missing column '{column}' at line {line}")]
    MissingColumn { line: usize, column: &'static str },

    #[error("Unexpected column at line {line}: {value}")]
    ExtraColumn { line: usize, value: String },

    #[error("JSON Error: {0}")]
    Json(String),
}
