use serde::{Deserialize, Serialize};

use super::color::ColorTally;
use super::config::ClassificationThresholds;

/// Health verdict for a scanned crop image.
///
/// Serialized with the human-readable labels the reporting contract uses
/// for its `disease` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthCategory {
    #[serde(rename = "Healthy")]
    Healthy,
    #[serde(rename = "Black Spot Disease")]
    BlackSpotDisease,
    #[serde(rename = "Leaf Blight")]
    LeafBlight,
    #[serde(rename = "Nutrient Deficiency")]
    NutrientDeficiency,
    #[serde(rename = "Plant Stress")]
    PlantStress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Diseased,
}

impl HealthCategory {
    pub const ALL: [HealthCategory; 5] = [
        HealthCategory::Healthy,
        HealthCategory::BlackSpotDisease,
        HealthCategory::LeafBlight,
        HealthCategory::NutrientDeficiency,
        HealthCategory::PlantStress,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HealthCategory::Healthy => "Healthy",
            HealthCategory::BlackSpotDisease => "Black Spot Disease",
            HealthCategory::LeafBlight => "Leaf Blight",
            HealthCategory::NutrientDeficiency => "Nutrient Deficiency",
            HealthCategory::PlantStress => "Plant Stress",
        }
    }

    /// Fixed confidence score attached to a verdict of this category.
    pub fn base_confidence(&self) -> u8 {
        match self {
            HealthCategory::Healthy => 85,
            HealthCategory::BlackSpotDisease => 90,
            HealthCategory::LeafBlight => 88,
            HealthCategory::NutrientDeficiency => 85,
            HealthCategory::PlantStress => 80,
        }
    }

    pub fn status(&self) -> HealthStatus {
        match self {
            HealthCategory::Healthy => HealthStatus::Healthy,
            HealthCategory::BlackSpotDisease | HealthCategory::LeafBlight => {
                HealthStatus::Diseased
            }
            HealthCategory::NutrientDeficiency | HealthCategory::PlantStress => {
                HealthStatus::Warning
            }
        }
    }
}

/// Select exactly one category from the tallied percentages.
///
/// First matching rule wins. The order is load-bearing: necrotic tissue
/// (black, then brown) outranks chlorosis and low canopy cover, and
/// Healthy is only reached when no abnormal threshold triggers. All
/// comparisons are strict.
pub struct HealthClassifier {
    thresholds: ClassificationThresholds,
}

impl HealthClassifier {
    pub fn new(thresholds: ClassificationThresholds) -> Self {
        Self { thresholds }
    }

    pub fn classify(&self, tally: &ColorTally) -> HealthCategory {
        let t = &self.thresholds;

        if tally.black_percent() > t.black_spot {
            HealthCategory::BlackSpotDisease
        } else if tally.brown_percent() > t.leaf_blight {
            HealthCategory::LeafBlight
        } else if tally.yellow_percent() > t.nutrient_deficiency {
            HealthCategory::NutrientDeficiency
        } else if tally.green_percent() < t.plant_stress {
            HealthCategory::PlantStress
        } else {
            HealthCategory::Healthy
        }
    }
}

impl Default for HealthClassifier {
    fn default() -> Self {
        Self::new(ClassificationThresholds::default())
    }
}
