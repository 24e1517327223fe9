// Gauge domain models: scales, color bands and slice arithmetic

/// Color used for the unfilled remainder of a gauge ring.
pub const EMPTY_SLICE_COLOR: &str = "#e0e0e0";

/// Color returned when a value matches none of a gauge's bands.
pub const DEFAULT_BAND_COLOR: &str = "#999";

/// Numeric range of a gauge. Invariant: `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeScale {
    pub min: f64,
    pub max: f64,
}

impl GaugeScale {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Split the scale into the (filled, empty) slice sizes of a progress
    /// ring. The value is clamped first, so the slices always sum to the
    /// span and neither is negative.
    pub fn slices(&self, value: f64) -> (f64, f64) {
        let clamped = self.clamp(value);
        (clamped - self.min, self.max - clamped)
    }
}

/// One color rule: an inclusive interval mapped to a display color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBand {
    pub min: f64,
    pub max: f64,
    pub color: &'static str,
}

impl ColorBand {
    pub const fn new(min: f64, max: f64, color: &'static str) -> Self {
        Self { min, max, color }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Scan bands in the given order and return the color of the first band
/// containing `value`. Bounds are inclusive on both ends, so adjacent bands
/// sharing a boundary resolve to whichever is listed first.
pub fn color_for(value: f64, bands: &[ColorBand]) -> &'static str {
    bands
        .iter()
        .find(|band| band.contains(value))
        .map(|band| band.color)
        .unwrap_or(DEFAULT_BAND_COLOR)
}

/// Format a reading for the gauge's center label, one decimal place.
pub fn value_label(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANDS: [ColorBand; 3] = [
        ColorBand::new(0.0, 5.0, "#ff4444"),
        ColorBand::new(5.0, 7.0, "#ffaa00"),
        ColorBand::new(7.0, 12.0, "#00cc44"),
    ];

    #[test]
    fn slices_sum_to_span_for_out_of_range_values() {
        let scale = GaugeScale::new(0.0, 12.0);
        for value in [-3.0, 0.0, 6.5, 12.0, 99.0] {
            let (filled, empty) = scale.slices(value);
            assert!(filled >= 0.0);
            assert!(empty >= 0.0);
            assert_eq!(filled + empty, scale.span());
        }
    }

    #[test]
    fn slices_clamp_below_and_above() {
        let scale = GaugeScale::new(-100.0, 10.0);
        assert_eq!(scale.slices(-250.0), (0.0, 110.0));
        assert_eq!(scale.slices(40.0), (110.0, 0.0));
    }

    #[test]
    fn color_for_picks_containing_band() {
        assert_eq!(color_for(3.0, &BANDS), "#ff4444");
        assert_eq!(color_for(6.0, &BANDS), "#ffaa00");
        assert_eq!(color_for(11.0, &BANDS), "#00cc44");
    }

    #[test]
    fn color_for_shared_boundary_favors_first_listed() {
        // 5.0 sits in both [0,5] and [5,7]
        assert_eq!(color_for(5.0, &BANDS), "#ff4444");
        assert_eq!(color_for(7.0, &BANDS), "#ffaa00");
    }

    #[test]
    fn color_for_overlapping_bands_returns_first_match() {
        let overlapping = [
            ColorBand::new(0.0, 10.0, "#111111"),
            ColorBand::new(5.0, 15.0, "#222222"),
        ];
        assert_eq!(color_for(8.0, &overlapping), "#111111");
    }

    #[test]
    fn color_for_falls_back_to_default_gray() {
        let bands = [ColorBand::new(0.0, 5.0, "red")];
        assert_eq!(color_for(10.0, &bands), DEFAULT_BAND_COLOR);
        assert_eq!(color_for(f64::NAN, &BANDS), DEFAULT_BAND_COLOR);
    }

    #[test]
    fn label_has_one_decimal_place() {
        assert_eq!(value_label(6.0), "6.0");
        assert_eq!(value_label(-45.25), "-45.2");
        assert_eq!(value_label(400.0), "400.0");
    }
}
