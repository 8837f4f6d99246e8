//! Error types shared by scene building, rendering and display.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("column length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("failed to render chart: {0}")]
    Render(String),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("display backend failed: {0}")]
    Display(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
