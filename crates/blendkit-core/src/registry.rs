//! The survey registry: name-to-definition lookup with insertion order.

use indexmap::IndexMap;

use crate::survey::Survey;

/// Insertion-ordered mapping from survey name to [`Survey`] definition.
///
/// The generator resolves survey-name strings against a registry at
/// construction time. [`SurveyRegistry::builtin`] seeds the surveys the
/// toolkit ships; callers may register additional definitions with
/// [`insert`](SurveyRegistry::insert) before constructing a generator.
///
/// # Examples
///
/// ```
/// use blendkit_core::SurveyRegistry;
///
/// let registry = SurveyRegistry::builtin();
/// let rubin = registry.get("Rubin").unwrap();
/// assert_eq!(rubin.bands.len(), 6);
/// assert!(registry.get("SDSS").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SurveyRegistry {
    surveys: IndexMap<String, Survey>,
}

impl SurveyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in survey definitions.
    ///
    /// Pixel scales and instrument parameters follow the WeakLensingDeblending
    /// survey tables. Band order matters: cutouts are produced in this order.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for survey in [
            Survey::new("Rubin", ["y", "z", "i", "r", "g", "u"], 0.2)
                .with_param("mirror_diameter", 8.36)
                .with_param("effective_area", 32.4)
                .with_param("exposure_time", 5520.0),
            Survey::new("DES", ["i", "z", "y", "g", "r"], 0.263)
                .with_param("mirror_diameter", 3.934)
                .with_param("effective_area", 10.014)
                .with_param("exposure_time", 800.0),
            Survey::new("CFHT", ["i", "r"], 0.185)
                .with_param("mirror_diameter", 3.592)
                .with_param("effective_area", 8.022)
                .with_param("exposure_time", 4300.0),
            Survey::new("HSC", ["y", "z", "i", "r", "g"], 0.17)
                .with_param("mirror_diameter", 8.2)
                .with_param("effective_area", 52.81)
                .with_param("exposure_time", 1200.0),
            Survey::new("Euclid", ["VIS"], 0.101)
                .with_param("mirror_diameter", 1.3)
                .with_param("effective_area", 1.15)
                .with_param("exposure_time", 2260.0),
            Survey::new("HST", ["f814w"], 0.06)
                .with_param("mirror_diameter", 2.4)
                .with_param("effective_area", 4.52)
                .with_param("exposure_time", 3000.0),
        ] {
            // Built-in definitions are valid by construction.
            registry.surveys.insert(survey.name.clone(), survey);
        }
        registry
    }

    /// Register a survey under its own name.
    ///
    /// Validates the definition first; an existing entry with the same
    /// name is replaced in place (its position in the order is kept).
    pub fn insert(&mut self, survey: Survey) -> Result<(), String> {
        survey.validate()?;
        self.surveys.insert(survey.name.clone(), survey);
        Ok(())
    }

    /// Look up a survey definition by name.
    pub fn get(&self, name: &str) -> Option<&Survey> {
        self.surveys.get(name)
    }

    /// Whether a survey with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.surveys.contains_key(name)
    }

    /// Registered survey names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.surveys.keys().map(String::as_str)
    }

    /// Number of registered surveys.
    pub fn len(&self) -> usize {
        self.surveys.len()
    }

    /// Whether the registry has no surveys.
    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contains_expected_surveys() {
        let registry = SurveyRegistry::builtin();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["Rubin", "DES", "CFHT", "HSC", "Euclid", "HST"]);
    }

    #[test]
    fn builtin_rubin_band_order() {
        let registry = SurveyRegistry::builtin();
        let rubin = registry.get("Rubin").unwrap();
        let bands: Vec<&str> = rubin.bands.iter().map(String::as_str).collect();
        assert_eq!(bands, ["y", "z", "i", "r", "g", "u"]);
    }

    #[test]
    fn builtin_definitions_all_validate() {
        let registry = SurveyRegistry::builtin();
        for name in registry.names() {
            let survey = registry.get(name).unwrap();
            assert!(survey.validate().is_ok(), "builtin '{name}' invalid");
        }
    }

    #[test]
    fn get_unknown_returns_none() {
        let registry = SurveyRegistry::builtin();
        assert!(registry.get("SDSS").is_none());
        assert!(!registry.contains("SDSS"));
    }

    #[test]
    fn insert_validates_definition() {
        let mut registry = SurveyRegistry::new();
        let err = registry.insert(Survey::new("Bad", Vec::<String>::new(), 0.2));
        assert!(err.is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn insert_preserves_lookup_and_order() {
        let mut registry = SurveyRegistry::new();
        registry.insert(Survey::new("B", ["g"], 0.2)).unwrap();
        registry.insert(Survey::new("A", ["r"], 0.2)).unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("A").unwrap().bands[0], "r");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut registry = SurveyRegistry::new();
        registry.insert(Survey::new("A", ["g"], 0.2)).unwrap();
        registry.insert(Survey::new("B", ["r"], 0.2)).unwrap();
        registry.insert(Survey::new("A", ["i"], 0.3)).unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(registry.get("A").unwrap().pixel_scale, 0.3);
    }
}
