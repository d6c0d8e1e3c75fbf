use serde::{Deserialize, Serialize};

use super::color::ColorTally;
use super::config::NutrientFloors;

/// Derived N/P/K scores as integer percentages.
///
/// These are heuristic proxies read off the color tallies, not measured
/// values. The contract is reproducibility of the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientEstimate {
    pub nitrogen: u8,
    pub phosphorus: u8,
    pub potassium: u8,
}

pub struct NutrientEstimator {
    floors: NutrientFloors,
}

impl NutrientEstimator {
    pub fn new(floors: NutrientFloors) -> Self {
        Self { floors }
    }

    /// Fixed linear formulas over the yellow and brown percentages, each
    /// clamped to its floor and rounded to the nearest integer.
    pub fn estimate(&self, tally: &ColorTally) -> NutrientEstimate {
        let yellow = tally.yellow_percent();
        let brown = tally.brown_percent();

        let nitrogen = 100.0 - yellow * 2.0 - brown * 3.0;
        let phosphorus = 90.0 - brown * 2.0;
        let potassium = 95.0 - yellow * 1.5;

        NutrientEstimate {
            nitrogen: clamp_to_floor(nitrogen, self.floors.nitrogen),
            phosphorus: clamp_to_floor(phosphorus, self.floors.phosphorus),
            potassium: clamp_to_floor(potassium, self.floors.potassium),
        }
    }
}

impl Default for NutrientEstimator {
    fn default() -> Self {
        Self::new(NutrientFloors::default())
    }
}

fn clamp_to_floor(value: f32, floor: u8) -> u8 {
    value.round().max(floor as f32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_with(yellow: u64, brown: u64, total: u64) -> ColorTally {
        ColorTally {
            green: 0,
            brown,
            yellow,
            black: 0,
            total_pixels: total,
        }
    }

    #[test]
    fn test_clean_canopy_scores_high() {
        let estimator = NutrientEstimator::default();
        let estimate = estimator.estimate(&tally_with(0, 0, 100));

        assert_eq!(estimate.nitrogen, 100);
        assert_eq!(estimate.phosphorus, 90);
        assert_eq!(estimate.potassium, 95);
    }

    #[test]
    fn test_formula_spot_values() {
        // 10% yellow, 5% brown:
        //   nitrogen   = 100 - 20 - 15 = 65
        //   phosphorus = 90 - 10       = 80
        //   potassium  = 95 - 15       = 80
        let estimator = NutrientEstimator::default();
        let estimate = estimator.estimate(&tally_with(10, 5, 100));

        assert_eq!(estimate.nitrogen, 65);
        assert_eq!(estimate.phosphorus, 80);
        assert_eq!(estimate.potassium, 80);
    }

    #[test]
    fn test_all_yellow_hits_potassium_floor() {
        // 100% yellow would put potassium at -55; the floor holds it at 25.
        let estimator = NutrientEstimator::default();
        let estimate = estimator.estimate(&tally_with(100, 0, 100));

        assert_eq!(estimate.potassium, 25);
        assert_eq!(estimate.nitrogen, 20);
    }

    #[test]
    fn test_heavy_browning_hits_phosphorus_floor() {
        let estimator = NutrientEstimator::default();
        let estimate = estimator.estimate(&tally_with(0, 80, 100));

        assert_eq!(estimate.phosphorus, 30);
        assert_eq!(estimate.nitrogen, 20);
        assert_eq!(estimate.potassium, 95);
    }

    #[test]
    fn test_fractional_percentages_round_to_nearest() {
        // 1 yellow pixel in 3: 33.33% yellow.
        //   potassium = 95 - 50.0 = 45
        let estimator = NutrientEstimator::default();
        let estimate = estimator.estimate(&tally_with(1, 0, 3));

        assert_eq!(estimate.potassium, 45);
    }
}
