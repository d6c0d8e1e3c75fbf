//! Ordered classifier chain with the local heuristic as the last resort.
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use super::analyzer::CropHealthAnalyzer;
use super::config::AnalyzerConfig;
use super::core::AnalysisContext;
use super::report::AnalysisResult;
use crate::error::AnalysisError;

/// One way of producing a verdict for an image.
///
/// Implementations range from remote vision providers to the local
/// heuristic; the chain tries them in insertion order.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, context: &AnalysisContext) -> Result<AnalysisResult, AnalysisError>;

    fn name(&self) -> &'static str;

    /// Local classifiers never block, so the chain skips the per-attempt
    /// timeout for them.
    fn is_local(&self) -> bool {
        false
    }
}

/// The guaranteed-available terminal member of every chain.
pub struct HeuristicClassifier {
    analyzer: CropHealthAnalyzer,
}

impl HeuristicClassifier {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        Ok(Self {
            analyzer: CropHealthAnalyzer::new(config)?,
        })
    }
}

#[async_trait]
impl Classifier for HeuristicClassifier {
    async fn classify(&self, context: &AnalysisContext) -> Result<AnalysisResult, AnalysisError> {
        self.analyzer.analyze_image(&context.image)
    }

    fn name(&self) -> &'static str {
        "HeuristicClassifier"
    }

    fn is_local(&self) -> bool {
        true
    }
}

/// Tries classifiers in order until one answers.
///
/// Remote providers get a per-attempt timeout; an error or timeout logs a
/// warning and falls through to the next member. Constructed through
/// [`ClassifierChain::new`] the chain always ends in the heuristic, so the
/// only errors that escape are the terminal member's own.
pub struct ClassifierChain {
    classifiers: Vec<Box<dyn Classifier>>,
    attempt_timeout: Duration,
}

impl ClassifierChain {
    /// Chain containing only the local heuristic.
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        Ok(Self {
            classifiers: vec![Box::new(HeuristicClassifier::new(config)?)],
            attempt_timeout: Duration::from_secs(2),
        })
    }

    /// Insert a provider ahead of the existing members, keeping the
    /// heuristic terminal. Later calls insert closer to the front.
    pub fn with_provider(mut self, classifier: Box<dyn Classifier>) -> Self {
        self.classifiers.insert(0, classifier);
        self
    }

    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn classifier_names(&self) -> Vec<&'static str> {
        self.classifiers.iter().map(|c| c.name()).collect()
    }

    /// Run the chain over an already-decoded image.
    pub async fn classify(
        &self,
        image: image::DynamicImage,
    ) -> Result<AnalysisResult, AnalysisError> {
        let context = AnalysisContext::new(image);
        let last = self.classifiers.len().saturating_sub(1);

        for (index, classifier) in self.classifiers.iter().enumerate() {
            let attempt = if classifier.is_local() {
                classifier.classify(&context).await
            } else {
                match tokio::time::timeout(self.attempt_timeout, classifier.classify(&context))
                    .await
                {
                    Ok(result) => result,
                    Err(_) => Err(AnalysisError::Timeout(
                        classifier.name(),
                        self.attempt_timeout,
                    )),
                }
            };

            match attempt {
                Ok(result) => {
                    debug!(
                        "{} produced the verdict in {}us",
                        classifier.name(),
                        context.processing_start.elapsed().as_micros()
                    );
                    return Ok(result);
                }
                Err(error) if index == last => return Err(error),
                Err(error) => {
                    warn!("{} failed, trying next classifier: {}", classifier.name(), error);
                }
            }
        }

        Err(AnalysisError::ChainExhausted)
    }
}
