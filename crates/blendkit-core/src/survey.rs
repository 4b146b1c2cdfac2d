//! Survey definitions and band lists.

use indexmap::IndexMap;
use smallvec::SmallVec;

/// An ordered list of photometric band names.
///
/// Uses `SmallVec<[String; 6]>` to avoid heap allocation of the list
/// spine for typical surveys (six bands covers every built-in survey).
/// Larger band lists spill to the heap transparently.
pub type BandList = SmallVec<[String; 6]>;

/// A named telescope/instrument configuration with its photometric bands.
///
/// Surveys are either resolved from the [`SurveyRegistry`](crate::SurveyRegistry)
/// by name or supplied inline by the caller. Once resolved into a generator
/// they are never mutated; band order is significant and is preserved
/// through cutout production.
///
/// # Examples
///
/// ```
/// use blendkit_core::Survey;
///
/// let survey = Survey::new("Rubin", ["g", "r", "i"], 0.2);
/// assert_eq!(survey.name, "Rubin");
/// assert_eq!(survey.bands.len(), 3);
/// assert!(survey.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Survey {
    /// Survey name, used as the batch key downstream.
    pub name: String,
    /// Photometric bands in observation order.
    pub bands: BandList,
    /// Pixel scale in arcseconds per pixel. Converts the angular stamp
    /// size into pixel dimensions.
    pub pixel_scale: f64,
    /// Survey-specific numeric parameters (mirror diameter, exposure
    /// time, ...). Opaque to the generator; passed through to cutouts
    /// for the downstream rendering stages.
    pub extra: IndexMap<String, f64>,
}

impl Survey {
    /// Create a survey definition with no extra parameters.
    pub fn new<I, S>(name: impl Into<String>, bands: I, pixel_scale: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            bands: bands.into_iter().map(Into::into).collect(),
            pixel_scale,
            extra: IndexMap::new(),
        }
    }

    /// Attach an extra survey parameter, builder-style.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: f64) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Validate structural invariants.
    ///
    /// Checks that the name is non-empty, at least one band is defined,
    /// no band name is empty or duplicated, and the pixel scale is finite
    /// and positive. Returns a human-readable reason on failure; callers
    /// wrap it in their own error type.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("survey name is empty".to_string());
        }
        if self.bands.is_empty() {
            return Err(format!("survey '{}' has no bands", self.name));
        }
        for (i, band) in self.bands.iter().enumerate() {
            if band.is_empty() {
                return Err(format!("survey '{}': band {i} has an empty name", self.name));
            }
            if self.bands[..i].contains(band) {
                return Err(format!("survey '{}': duplicate band '{band}'", self.name));
            }
        }
        if !self.pixel_scale.is_finite() || self.pixel_scale <= 0.0 {
            return Err(format!(
                "survey '{}': pixel_scale must be finite and positive, got {}",
                self.name, self.pixel_scale,
            ));
        }
        Ok(())
    }

    /// Whether the survey defines the given band.
    pub fn has_band(&self, band: &str) -> bool {
        self.bands.iter().any(|b| b == band)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_valid_survey_succeeds() {
        let s = Survey::new("Rubin", ["u", "g", "r", "i", "z", "y"], 0.2);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn validate_empty_name_fails() {
        let s = Survey::new("", ["g"], 0.2);
        let reason = s.validate().unwrap_err();
        assert!(reason.contains("name is empty"), "got: {reason}");
    }

    #[test]
    fn validate_no_bands_fails() {
        let s = Survey::new("Rubin", Vec::<String>::new(), 0.2);
        let reason = s.validate().unwrap_err();
        assert!(reason.contains("no bands"), "got: {reason}");
    }

    #[test]
    fn validate_empty_band_name_fails() {
        let s = Survey::new("Rubin", ["g", ""], 0.2);
        let reason = s.validate().unwrap_err();
        assert!(reason.contains("empty name"), "got: {reason}");
    }

    #[test]
    fn validate_duplicate_band_fails() {
        let s = Survey::new("Rubin", ["g", "r", "g"], 0.2);
        let reason = s.validate().unwrap_err();
        assert!(reason.contains("duplicate band 'g'"), "got: {reason}");
    }

    #[test]
    fn validate_nan_pixel_scale_fails() {
        let s = Survey::new("Rubin", ["g"], f64::NAN);
        assert!(s.validate().is_err());
    }

    #[test]
    fn validate_zero_pixel_scale_fails() {
        let s = Survey::new("Rubin", ["g"], 0.0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn with_param_preserves_insertion_order() {
        let s = Survey::new("Rubin", ["g"], 0.2)
            .with_param("mirror_diameter", 8.36)
            .with_param("exposure_time", 5520.0);
        let keys: Vec<&str> = s.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, ["mirror_diameter", "exposure_time"]);
    }

    #[test]
    fn has_band_matches_exactly() {
        let s = Survey::new("Rubin", ["g", "r"], 0.2);
        assert!(s.has_band("g"));
        assert!(!s.has_band("G"));
        assert!(!s.has_band("i"));
    }
}
