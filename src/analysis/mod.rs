pub mod analyzer;
pub mod chain;
pub mod classifier;
pub mod color;
pub mod config;
pub mod core;
pub mod guidance;
pub mod nutrients;
pub mod report;

pub use analyzer::CropHealthAnalyzer;
pub use chain::{Classifier, ClassifierChain, HeuristicClassifier};
pub use classifier::{HealthCategory, HealthClassifier, HealthStatus};
pub use color::{ColorBreakdown, ColorTally};
pub use config::{AnalyzerConfig, ClassificationThresholds, NutrientFloors, PixelColorRanges};
pub use core::{AnalysisContext, AnalysisRequest, AnalyzedImage};
pub use guidance::{GuidanceCatalog, GuidanceEntry, Severity};
pub use nutrients::{NutrientEstimate, NutrientEstimator};
pub use report::AnalysisResult;
