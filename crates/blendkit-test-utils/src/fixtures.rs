//! Reusable survey fixtures.

use blendkit_core::{Survey, SurveyRegistry};

/// The two-band survey used throughout the generator tests:
/// `{name: "S", bands: ["g", "r"]}` at a 0.2 arcsec/pixel scale.
pub fn two_band_survey() -> Survey {
    Survey::new("S", ["g", "r"], 0.2)
}

/// A registry containing only [`two_band_survey`].
pub fn custom_registry() -> SurveyRegistry {
    let mut registry = SurveyRegistry::new();
    registry
        .insert(two_band_survey())
        .expect("fixture survey is valid");
    registry
}
