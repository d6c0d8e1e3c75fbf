use serde::{Deserialize, Serialize};

/// Configuration for crop-health analysis with tunable parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub thresholds: ClassificationThresholds,
    pub color_ranges: PixelColorRanges,
    pub nutrient_floors: NutrientFloors,
    /// Images wider or taller than this are downscaled before the pixel scan.
    pub max_dimension: u32,
}

/// Percentage thresholds for the category cascade.
///
/// The cascade checks these in a fixed order (black spot, leaf blight,
/// nutrient deficiency, plant stress) and all comparisons are strict, so
/// a breakdown sitting exactly on a threshold does not trigger it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    pub black_spot: f32,
    pub leaf_blight: f32,
    pub nutrient_deficiency: f32,
    pub plant_stress: f32,
}

/// Channel cut-offs for the per-pixel color tests.
///
/// The four tests are independent range checks, not a partition of RGB
/// space: a pixel may satisfy several of them or none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PixelColorRanges {
    pub green_min: u8,
    pub brown_red_min: u8,
    pub brown_green_min: u8,
    pub brown_blue_max: u8,
    pub yellow_red_min: u8,
    pub yellow_green_min: u8,
    pub yellow_blue_max: u8,
    pub black_max: u8,
}

/// Lower bounds for the derived nutrient estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientFloors {
    pub nitrogen: u8,
    pub phosphorus: u8,
    pub potassium: u8,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            thresholds: ClassificationThresholds::default(),
            color_ranges: PixelColorRanges::default(),
            nutrient_floors: NutrientFloors::default(),
            max_dimension: 1024,
        }
    }
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            black_spot: 5.0,           // % black pixels before black spot disease
            leaf_blight: 15.0,         // % brown pixels before leaf blight
            nutrient_deficiency: 20.0, // % yellow pixels before chlorosis verdict
            plant_stress: 30.0,        // minimum % green for a healthy canopy
        }
    }
}

impl Default for PixelColorRanges {
    fn default() -> Self {
        Self {
            green_min: 100,
            brown_red_min: 100,
            brown_green_min: 60,
            brown_blue_max: 50,
            yellow_red_min: 200,
            yellow_green_min: 200,
            yellow_blue_max: 100,
            black_max: 50,
        }
    }
}

impl Default for NutrientFloors {
    fn default() -> Self {
        Self {
            nitrogen: 20,
            phosphorus: 30,
            potassium: 25,
        }
    }
}

impl AnalyzerConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.max_dimension == 0 {
            return Err("Max dimension must be greater than 0".to_string());
        }

        let t = &self.thresholds;
        for (name, value) in [
            ("black_spot", t.black_spot),
            ("leaf_blight", t.leaf_blight),
            ("nutrient_deficiency", t.nutrient_deficiency),
            ("plant_stress", t.plant_stress),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("Threshold {} must be between 0 and 100", name));
            }
        }

        let f = &self.nutrient_floors;
        if f.nitrogen > 100 || f.phosphorus > 100 || f.potassium > 100 {
            return Err("Nutrient floors must be at most 100".to_string());
        }

        Ok(())
    }

    /// Set the downscale bound for large images
    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Replace the cascade thresholds
    pub fn with_thresholds(mut self, thresholds: ClassificationThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replace the nutrient floors
    pub fn with_nutrient_floors(mut self, floors: NutrientFloors) -> Self {
        self.nutrient_floors = floors;
        self
    }
}

impl PixelColorRanges {
    /// Healthy leaf tissue: green dominates both other channels.
    pub fn is_green(&self, r: u8, g: u8, b: u8) -> bool {
        g > r && g > b && g > self.green_min
    }

    /// Necrotic or blight spotting.
    pub fn is_brown(&self, r: u8, g: u8, b: u8) -> bool {
        r > self.brown_red_min && g > self.brown_green_min && b < self.brown_blue_max
    }

    /// Chlorosis or nutrient stress.
    pub fn is_yellow(&self, r: u8, g: u8, b: u8) -> bool {
        r > self.yellow_red_min && g > self.yellow_green_min && b < self.yellow_blue_max
    }

    /// Dark necrotic spotting.
    pub fn is_black(&self, r: u8, g: u8, b: u8) -> bool {
        r < self.black_max && g < self.black_max && b < self.black_max
    }
}
