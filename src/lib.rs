pub mod analysis;
pub mod config;
pub mod error;

pub use error::{AnalysisError, AppError};

pub use analysis::analyzer::CropHealthAnalyzer;
pub use analysis::chain::{Classifier, ClassifierChain};
pub use analysis::config::AnalyzerConfig;
pub use analysis::report::AnalysisResult;
pub use config::Configuration;
