use serde::{Deserialize, Serialize};

use crate::core::types::RatingPoint;

/// Closed numeric interval mapped to a display color.
///
/// Bands are checked in host-listed order and the first match wins; callers
/// are responsible for supplying non-overlapping, sorted bands. Overlap is
/// neither detected nor rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    pub low: f64,
    pub high: f64,
    pub hex_rgb: String,
    /// Normalized hue/saturation/lightness triple, each in `[0, 1]`.
    pub hsl: [f64; 3],
}

impl ColorBand {
    #[must_use]
    pub fn new(low: f64, high: f64, hex_rgb: impl Into<String>, hsl: [f64; 3]) -> Self {
        Self {
            low,
            high,
            hex_rgb: hex_rgb.into(),
            hsl,
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Lightened HSL triple used for band backgrounds and tooltip text.
    ///
    /// Lightness is remapped to the upper half of its range so band fills
    /// stay readable behind data.
    #[must_use]
    pub fn display_hsl(&self) -> [f64; 3] {
        [self.hsl[0], self.hsl[1], (self.hsl[2] + 1.0) * 0.5]
    }

    /// CSS `hsl(...)` string for the lightened display color.
    #[must_use]
    pub fn hsl_css(&self) -> String {
        let [h, s, l] = self.display_hsl();
        format!("hsl({},{}%,{}%)", h * 360.0, s * 100.0, l * 100.0)
    }
}

/// Color space requested from a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Rgb,
    Hsl,
}

/// Strategy resolving a point's display color.
pub trait ColorResolver {
    fn resolve(&self, point: &RatingPoint, space: ColorSpace) -> Option<String>;
}

/// Band-scan resolver over a point's coloring field.
#[derive(Debug, Clone, PartialEq)]
pub struct BandColorResolver {
    bands: Vec<ColorBand>,
    coloring_field: String,
}

impl BandColorResolver {
    #[must_use]
    pub fn new(bands: Vec<ColorBand>, coloring_field: impl Into<String>) -> Self {
        Self {
            bands,
            coloring_field: coloring_field.into(),
        }
    }

    #[must_use]
    pub fn bands(&self) -> &[ColorBand] {
        &self.bands
    }

    #[must_use]
    pub fn has_bands(&self) -> bool {
        !self.bands.is_empty()
    }

    #[must_use]
    pub fn resolve_value(&self, value: f64, space: ColorSpace) -> Option<String> {
        self.bands.iter().find(|band| band.contains(value)).map(|band| match space {
            ColorSpace::Rgb => band.hex_rgb.clone(),
            ColorSpace::Hsl => band.hsl_css(),
        })
    }
}

impl ColorResolver for BandColorResolver {
    fn resolve(&self, point: &RatingPoint, space: ColorSpace) -> Option<String> {
        let value = point.field_value(&self.coloring_field)?;
        self.resolve_value(value, space)
    }
}
