use std::time::Duration;
use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Analysis Error: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("Config Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Usage Error: {0}")]
    Usage(String),
}

// Analyzer Error Type

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("Decoded image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("Invalid analyzer configuration: {0}")]
    InvalidConfig(String),
    #[error("Classifier {0} timed out after {1:?}")]
    Timeout(&'static str, Duration),
    #[error("Classifier {0} is not available")]
    Unavailable(&'static str),
    #[error("No classifier in the chain produced a result")]
    ChainExhausted,
}
