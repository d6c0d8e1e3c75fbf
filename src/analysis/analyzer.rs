/// Crop-health analyzer - decode, scan, classify, report in one pass
use image::imageops::FilterType;
use image::DynamicImage;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};
use tower::Service;
use tracing::{debug, info};

use super::classifier::HealthClassifier;
use super::color::{ColorBreakdown, ColorTally};
use super::config::AnalyzerConfig;
use super::core::{AnalysisRequest, AnalyzedImage};
use super::guidance::{GuidanceCatalog, Severity};
use super::nutrients::NutrientEstimator;
use super::report::AnalysisResult;
use crate::error::AnalysisError;

/// Deterministic heuristic analyzer over raw pixel data.
///
/// Stateless across calls: every invocation scans its own image into its
/// own tally, so concurrent analyses need no coordination.
pub struct CropHealthAnalyzer {
    classifier: HealthClassifier,
    estimator: NutrientEstimator,
    catalog: GuidanceCatalog,
    config: AnalyzerConfig,
}

impl CropHealthAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        config.validate().map_err(AnalysisError::InvalidConfig)?;

        Ok(Self {
            classifier: HealthClassifier::new(config.thresholds.clone()),
            estimator: NutrientEstimator::new(config.nutrient_floors.clone()),
            catalog: GuidanceCatalog::default(),
            config,
        })
    }

    /// Analyzer with a translated or otherwise customized guidance catalog.
    pub fn with_catalog(mut self, catalog: GuidanceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Decode raw upload bytes and analyze them.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisResult, AnalysisError> {
        let image = image::load_from_memory(bytes)?;
        self.analyze_image(&image)
    }

    /// Analyze an already-decoded image.
    pub fn analyze_image(&self, image: &DynamicImage) -> Result<AnalysisResult, AnalysisError> {
        let analysis_start = Instant::now();

        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(AnalysisError::EmptyImage { width, height });
        }

        // Bound the linear scan: the pass is O(pixels) and decoding plus
        // scanning dominates the cost of a call.
        let rgb = if width.max(height) > self.config.max_dimension {
            let scaled = image.resize(
                self.config.max_dimension,
                self.config.max_dimension,
                FilterType::Triangle,
            );
            debug!(
                "Downscaled {}x{} to {}x{} before scan",
                width,
                height,
                scaled.width(),
                scaled.height()
            );
            scaled.to_rgb8()
        } else {
            image.to_rgb8()
        };

        let tally = ColorTally::from_image(&rgb, &self.config.color_ranges);
        debug!(
            "Color scan over {} pixels: green {:.1}%, brown {:.1}%, yellow {:.1}%, black {:.1}%",
            tally.total_pixels,
            tally.green_percent(),
            tally.brown_percent(),
            tally.yellow_percent(),
            tally.black_percent()
        );

        let category = self.classifier.classify(&tally);
        let confidence = category.base_confidence();
        let nutrients = self.estimator.estimate(&tally);
        let guidance = self.catalog.lookup(category);

        let result = AnalysisResult {
            category,
            confidence,
            status: category.status(),
            color_analysis: ColorBreakdown::from(&tally),
            nutrients,
            severity: Severity::from_confidence(confidence),
            recommendations: guidance.recommendations.clone(),
            treatment_steps: guidance.treatment_steps.clone(),
            prevention_tips: self.catalog.prevention_tips().to_vec(),
        };

        let total_time = analysis_start.elapsed().as_micros() as u64;
        info!(
            "Analysis completed in {}us: {} at confidence {}",
            total_time,
            category.label(),
            confidence
        );

        Ok(result)
    }

    pub fn get_config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl Default for CropHealthAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default()).expect("Default config should be valid")
    }
}

impl Clone for CropHealthAnalyzer {
    fn clone(&self) -> Self {
        Self::new(self.config.clone())
            .expect("Config was validated at construction")
            .with_catalog(self.catalog.clone())
    }
}

/// Tower Service wrapper for embedding the analyzer in a request pipeline
impl Service<AnalysisRequest> for CropHealthAnalyzer {
    type Response = AnalyzedImage;
    type Error = AnalysisError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: AnalysisRequest) -> Self::Future {
        let outcome = self.analyze_image(&request.image);

        Box::pin(async move {
            let result = outcome?;
            Ok(AnalyzedImage {
                request_id: request.id,
                timestamp: request.timestamp,
                result,
            })
        })
    }
}
