//! Single-pass color accumulation over a decoded crop image.
use image::RgbImage;
use serde::{Deserialize, Serialize};

use super::config::PixelColorRanges;

/// Running color counters for one image scan.
///
/// The counters are filled by exactly one linear pass over the bitmap and
/// read-only afterwards. Because the pixel tests are independent range
/// checks, the four percentages sum to at most 100 but a single pixel may
/// be counted in more than one bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTally {
    pub green: u64,
    pub brown: u64,
    pub yellow: u64,
    pub black: u64,
    pub total_pixels: u64,
}

impl ColorTally {
    /// Count one pixel against every matching bucket.
    pub fn record(&mut self, r: u8, g: u8, b: u8, ranges: &PixelColorRanges) {
        if ranges.is_green(r, g, b) {
            self.green += 1;
        }
        if ranges.is_brown(r, g, b) {
            self.brown += 1;
        }
        if ranges.is_yellow(r, g, b) {
            self.yellow += 1;
        }
        if ranges.is_black(r, g, b) {
            self.black += 1;
        }
        self.total_pixels += 1;
    }

    /// Scan a decoded bitmap row-major, feeding every pixel through the
    /// color tests exactly once. Alpha has already been dropped by the
    /// RGB conversion.
    pub fn from_image(rgb: &RgbImage, ranges: &PixelColorRanges) -> Self {
        let mut tally = Self::default();
        for pixel in rgb.pixels() {
            let [r, g, b] = pixel.0;
            tally.record(r, g, b, ranges);
        }
        tally
    }

    pub fn green_percent(&self) -> f32 {
        self.percent(self.green)
    }

    pub fn brown_percent(&self) -> f32 {
        self.percent(self.brown)
    }

    pub fn yellow_percent(&self) -> f32 {
        self.percent(self.yellow)
    }

    pub fn black_percent(&self) -> f32 {
        self.percent(self.black)
    }

    fn percent(&self, count: u64) -> f32 {
        if self.total_pixels == 0 {
            0.0
        } else {
            count as f32 / self.total_pixels as f32 * 100.0
        }
    }
}

/// Rounded per-color percentages as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorBreakdown {
    pub green: u8,
    pub brown: u8,
    pub yellow: u8,
    pub black: u8,
}

impl From<&ColorTally> for ColorBreakdown {
    fn from(tally: &ColorTally) -> Self {
        Self {
            green: tally.green_percent().round() as u8,
            brown: tally.brown_percent().round() as u8,
            yellow: tally.yellow_percent().round() as u8,
            black: tally.black_percent().round() as u8,
        }
    }
}

impl ColorBreakdown {
    pub fn zeroed() -> Self {
        Self {
            green: 0,
            brown: 0,
            yellow: 0,
            black: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        ImageBuffer::from_pixel(width, height, Rgb(color))
    }

    #[test]
    fn test_all_green_image_tallies_to_100_percent() {
        let rgb = solid_image(10, 10, [0, 200, 0]);
        let tally = ColorTally::from_image(&rgb, &PixelColorRanges::default());

        assert_eq!(tally.total_pixels, 100);
        assert_eq!(tally.green, 100);
        assert_eq!(tally.green_percent(), 100.0);
        assert_eq!(tally.brown, 0);
        assert_eq!(tally.black, 0);
    }

    #[test]
    fn test_unmatched_pixels_count_toward_no_bucket() {
        // Mid-gray matches none of the four tests but still counts as scanned.
        let rgb = solid_image(4, 4, [80, 80, 80]);
        let tally = ColorTally::from_image(&rgb, &PixelColorRanges::default());

        assert_eq!(tally.total_pixels, 16);
        assert_eq!(tally.green + tally.brown + tally.yellow + tally.black, 0);
    }

    #[test]
    fn test_one_pixel_can_fill_two_buckets() {
        // Saturated yellow passes both the yellow and the brown test, so the
        // bucket counts are not a partition of the pixel count.
        let rgb = solid_image(2, 2, [230, 230, 20]);
        let tally = ColorTally::from_image(&rgb, &PixelColorRanges::default());

        assert_eq!(tally.yellow, 4);
        assert_eq!(tally.brown, 4);
        assert_eq!(tally.total_pixels, 4);
    }

    #[test]
    fn test_breakdown_rounds_to_integers() {
        // 1 black pixel out of 3 -> 33.33% -> 33.
        let mut rgb = solid_image(3, 1, [0, 200, 0]);
        rgb.put_pixel(0, 0, Rgb([0, 0, 0]));
        let tally = ColorTally::from_image(&rgb, &PixelColorRanges::default());
        let breakdown = ColorBreakdown::from(&tally);

        assert_eq!(breakdown.black, 33);
        assert_eq!(breakdown.green, 67);
    }

    #[test]
    fn test_empty_tally_reports_zero_percentages() {
        let tally = ColorTally::default();
        assert_eq!(tally.green_percent(), 0.0);
        assert_eq!(tally.black_percent(), 0.0);
    }
}
