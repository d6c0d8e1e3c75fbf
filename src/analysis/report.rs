use serde::{Deserialize, Serialize};

use super::classifier::{HealthCategory, HealthStatus};
use super::color::ColorBreakdown;
use super::guidance::Severity;
use super::nutrients::NutrientEstimate;

/// Complete analysis verdict in the shape the web backend serves to the
/// frontend. Field names follow the existing JSON contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "disease")]
    pub category: HealthCategory,
    pub confidence: u8,
    pub status: HealthStatus,
    #[serde(rename = "colorAnalysis")]
    pub color_analysis: ColorBreakdown,
    pub nutrients: NutrientEstimate,
    pub severity: Severity,
    pub recommendations: Vec<String>,
    #[serde(rename = "treatmentSteps")]
    pub treatment_steps: Vec<String>,
    #[serde(rename = "preventionTips")]
    pub prevention_tips: Vec<String>,
}

impl AnalysisResult {
    /// Degraded static response for callers that must never surface a hard
    /// failure to the farmer. Confidence sits below every real verdict so
    /// consumers can tell the stub from an actual classification. The
    /// analyzer itself never returns this; it is the caller's last resort
    /// after the whole classifier chain has failed.
    pub fn unknown_healthy_stub() -> Self {
        let category = HealthCategory::Healthy;
        let confidence = 40;
        Self {
            category,
            confidence,
            status: category.status(),
            color_analysis: ColorBreakdown::zeroed(),
            nutrients: NutrientEstimate {
                nitrogen: 50,
                phosphorus: 50,
                potassium: 50,
            },
            severity: Severity::from_confidence(confidence),
            recommendations: vec![
                "Analysis could not be completed, please retake the photo".to_string(),
                "Use a clear close-up of a single leaf in daylight".to_string(),
            ],
            treatment_steps: vec!["Re-upload a clearer image before acting".to_string()],
            prevention_tips: vec![
                "Scout the field at least once a week and scan suspect leaves".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_field_names_match_contract() {
        let result = AnalysisResult::unknown_healthy_stub();
        let json = serde_json::to_value(&result).unwrap();

        for field in [
            "disease",
            "confidence",
            "status",
            "colorAnalysis",
            "nutrients",
            "severity",
            "recommendations",
            "treatmentSteps",
            "preventionTips",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }

        assert_eq!(json["disease"], "Healthy");
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["severity"], "Low");
        assert_eq!(json["colorAnalysis"]["green"], 0);
        assert_eq!(json["nutrients"]["nitrogen"], 50);
    }

    #[test]
    fn test_stub_confidence_below_every_real_verdict() {
        let stub = AnalysisResult::unknown_healthy_stub();
        for category in HealthCategory::ALL {
            assert!(stub.confidence < category.base_confidence());
        }
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let result = AnalysisResult::unknown_healthy_stub();
        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();

        assert_eq!(back.category, result.category);
        assert_eq!(back.confidence, result.confidence);
        assert_eq!(back.color_analysis, result.color_analysis);
    }
}
