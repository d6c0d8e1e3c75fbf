//! Fixed guidance tables keyed by health category.
use serde::{Deserialize, Serialize};

use super::classifier::HealthCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence > 90 {
            Severity::High
        } else if confidence > 70 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// Hand-authored guidance for one health category.
#[derive(Debug, Clone)]
pub struct GuidanceEntry {
    pub recommendations: Vec<String>,
    pub treatment_steps: Vec<String>,
}

/// Immutable category-to-guidance mapping, built once and shared.
///
/// Swapping the catalog is the localization point: construct one with
/// translated strings instead of editing call sites. Lookup is total, so
/// every category resolves to an entry.
#[derive(Debug, Clone)]
pub struct GuidanceCatalog {
    healthy: GuidanceEntry,
    black_spot: GuidanceEntry,
    leaf_blight: GuidanceEntry,
    nutrient_deficiency: GuidanceEntry,
    plant_stress: GuidanceEntry,
    prevention_tips: Vec<String>,
}

impl GuidanceCatalog {
    pub fn lookup(&self, category: HealthCategory) -> &GuidanceEntry {
        match category {
            HealthCategory::Healthy => &self.healthy,
            HealthCategory::BlackSpotDisease => &self.black_spot,
            HealthCategory::LeafBlight => &self.leaf_blight,
            HealthCategory::NutrientDeficiency => &self.nutrient_deficiency,
            HealthCategory::PlantStress => &self.plant_stress,
        }
    }

    /// Category-independent tips; the same list ships with every verdict.
    pub fn prevention_tips(&self) -> &[String] {
        &self.prevention_tips
    }
}

fn entry(recommendations: &[&str], treatment_steps: &[&str]) -> GuidanceEntry {
    GuidanceEntry {
        recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
        treatment_steps: treatment_steps.iter().map(|s| s.to_string()).collect(),
    }
}

impl Default for GuidanceCatalog {
    fn default() -> Self {
        Self {
            healthy: entry(
                &[
                    "Crop looks healthy, continue the current care routine",
                    "Keep the irrigation schedule regular",
                    "Scout the field weekly for early signs of stress",
                    "Apply balanced fertilizer at the usual interval",
                ],
                &[
                    "No treatment needed at this time",
                    "Maintain regular watering and nutrition",
                    "Re-scan after heavy rain or heat spells",
                ],
            ),
            black_spot: entry(
                &[
                    "Remove and destroy affected leaves immediately",
                    "Apply a copper-based fungicide spray",
                    "Avoid overhead watering to keep foliage dry",
                    "Improve air circulation around the plants",
                ],
                &[
                    "Prune out all leaves showing black lesions",
                    "Spray copper oxychloride at the label rate",
                    "Repeat the spray after 10 to 14 days",
                    "Collect and burn fallen leaves near the plants",
                ],
            ),
            leaf_blight: entry(
                &[
                    "Apply a protectant fungicide such as mancozeb",
                    "Remove heavily spotted leaves from the canopy",
                    "Water at the base of the plant, not the leaves",
                    "Rotate with a non-host crop next season",
                ],
                &[
                    "Spray mancozeb or chlorothalonil at first spotting",
                    "Thin the canopy so leaves dry quickly",
                    "Repeat the application on a 7 to 10 day schedule",
                    "Plow in crop residue after harvest",
                ],
            ),
            nutrient_deficiency: entry(
                &[
                    "Yellowing suggests nitrogen shortfall, top-dress with urea",
                    "Run a soil test to confirm which nutrient is short",
                    "Apply a foliar micronutrient spray for quick recovery",
                    "Add well-rotted compost to improve soil fertility",
                ],
                &[
                    "Top-dress nitrogen fertilizer along the rows",
                    "Water in the fertilizer the same day",
                    "Follow up with a foliar feed after one week",
                    "Re-scan in two weeks to check the new growth",
                ],
            ),
            plant_stress: entry(
                &[
                    "Low canopy cover detected, check watering first",
                    "Shade young plants during peak afternoon heat",
                    "Check the root zone for waterlogging or pests",
                    "Hold off on fertilizer until the plants recover",
                ],
                &[
                    "Restore a steady watering schedule",
                    "Mulch around the base to hold soil moisture",
                    "Inspect stems and roots for pest damage",
                    "Re-scan after a week of corrected care",
                ],
            ),
            prevention_tips: [
                "Use certified disease-free seed and planting material",
                "Keep plant spacing wide enough for airflow",
                "Water early in the day so foliage dries before night",
                "Rotate crops to break disease and pest cycles",
                "Scout the field at least once a week and scan suspect leaves",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_complete_guidance() {
        let catalog = GuidanceCatalog::default();

        for category in HealthCategory::ALL {
            let entry = catalog.lookup(category);
            assert!(
                !entry.recommendations.is_empty(),
                "no recommendations for {:?}",
                category
            );
            assert!(
                !entry.treatment_steps.is_empty(),
                "no treatment steps for {:?}",
                category
            );
        }
        assert_eq!(catalog.prevention_tips().len(), 5);
    }

    #[test]
    fn test_each_category_carries_four_recommendations() {
        let catalog = GuidanceCatalog::default();
        for category in HealthCategory::ALL {
            assert_eq!(catalog.lookup(category).recommendations.len(), 4);
        }
    }

    #[test]
    fn test_severity_bands() {
        assert_eq!(Severity::from_confidence(95), Severity::High);
        assert_eq!(Severity::from_confidence(91), Severity::High);
        // The bands are strict: exactly 90 is Medium.
        assert_eq!(Severity::from_confidence(90), Severity::Medium);
        assert_eq!(Severity::from_confidence(71), Severity::Medium);
        assert_eq!(Severity::from_confidence(70), Severity::Low);
        assert_eq!(Severity::from_confidence(0), Severity::Low);
    }
}
