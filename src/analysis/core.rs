use chrono::Utc;
use image::{DynamicImage, RgbImage};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::error::AnalysisError;

/// Decoded image state that flows through the classifier chain.
///
/// The RGB conversion happens once here so every classifier in the chain
/// reads the same pixel data.
#[derive(Clone)]
pub struct AnalysisContext {
    pub image: Arc<DynamicImage>,
    pub rgb: Arc<RgbImage>,
    pub dimensions: (u32, u32),
    pub processing_start: Instant,
}

impl AnalysisContext {
    pub fn new(image: DynamicImage) -> Self {
        let rgb = Arc::new(image.to_rgb8());
        let dimensions = rgb.dimensions();

        Self {
            image: Arc::new(image),
            rgb,
            dimensions,
            processing_start: Instant::now(),
        }
    }

}

/// One incoming image to analyze, as handed over by the upload layer.
#[derive(Clone)]
pub struct AnalysisRequest {
    pub id: Uuid,
    pub image: DynamicImage,
    pub timestamp: i64,
}

impl AnalysisRequest {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Decode raw upload bytes (JPEG, PNG, any format the decoder knows).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AnalysisError> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::new(image))
    }
}

/// Analysis output paired with the request it answers.
#[derive(Debug, Clone)]
pub struct AnalyzedImage {
    pub request_id: Uuid,
    pub timestamp: i64,
    pub result: super::report::AnalysisResult,
}
