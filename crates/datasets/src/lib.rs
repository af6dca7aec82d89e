//! Tabular data sources for the parking and fuel price tables. Everything
//! here is read once at startup; the resulting vectors are shared read-only
//! afterwards.

use std::{error::Error, fmt, io};

pub mod fuel;
pub mod parking;
pub mod seed;

#[derive(Debug)]
pub enum DatasetError {
    Io(io::Error),
    Csv(csv::Error),
    /// The file exists but none of its rows could be used.
    NoUsableRows,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(why) => write!(f, "could not read dataset: {why}"),
            DatasetError::Csv(why) => write!(f, "could not parse dataset: {why}"),
            DatasetError::NoUsableRows => write!(f, "dataset contains no usable rows"),
        }
    }
}

impl Error for DatasetError {}

impl From<io::Error> for DatasetError {
    fn from(why: io::Error) -> Self {
        DatasetError::Io(why)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(why: csv::Error) -> Self {
        DatasetError::Csv(why)
    }
}

pub type DatasetResult<T> = Result<T, DatasetError>;
