use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("empty path: both an input and an output file must be given")]
    EmptyPath,

    #[error("input file not found or unreadable: {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("required field missing from header: {field}")]
    MissingField { field: &'static str },

    #[error("cannot write output file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("record {record}: field {field} contains a character the CHP format cannot carry")]
    Unrepresentable { record: u64, field: &'static str },

    #[error("malformed input: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
