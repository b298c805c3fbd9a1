use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid date on line {line}: {value:?}")]
    InvalidDate { line: u64, value: String },

    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("Cannot write output {}: {source}", path.display())]
    OutputPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chart rendering error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl StatsError {
    /// True for errors caused by the shape or content of the input data
    pub fn is_data_format(&self) -> bool {
        matches!(
            self,
            StatsError::MissingColumn(_)
                | StatsError::InvalidDate { .. }
                | StatsError::DataFormat(_)
                | StatsError::Csv(_)
        )
    }

    /// Context line shown when loading an input file fails
    pub fn input_context(&self) -> &'static str {
        if self.is_data_format() {
            "Input is not a valid transaction CSV"
        } else {
            "Failed to read input CSV"
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for StatsError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        StatsError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
