//! Survey specification types and resolution.
//!
//! A [`SurveySpec`] names the surveys an
//! [`ObservingGenerator`](crate::ObservingGenerator) should cover: a
//! single registry name, or an ordered list mixing registry names with
//! inline [`Survey`] definitions. Resolution happens once at generator
//! construction and preserves the given order exactly, so downstream
//! batch iteration is reproducible.

use blendkit_core::{GeneratorError, Survey, SurveyRegistry};

/// One element of a survey list: a registry name or an inline definition.
///
/// # Examples
///
/// ```
/// use blendkit_core::Survey;
/// use blendkit_obs::SurveyRef;
///
/// let by_name = SurveyRef::from("Rubin");
/// assert!(matches!(by_name, SurveyRef::Name(_)));
///
/// let inline = SurveyRef::from(Survey::new("Custom", ["a", "b"], 0.1));
/// assert!(matches!(inline, SurveyRef::Inline(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SurveyRef {
    /// Look the survey up in the registry by name.
    Name(String),
    /// Use this caller-supplied definition as-is.
    Inline(Survey),
}

impl From<&str> for SurveyRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for SurveyRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Survey> for SurveyRef {
    fn from(survey: Survey) -> Self {
        Self::Inline(survey)
    }
}

/// Specification of which surveys a generator covers.
///
/// `ByName` resolves one registry entry; `ByList` resolves an ordered
/// list whose elements are each a registry name or an inline definition.
///
/// # Examples
///
/// ```
/// use blendkit_core::SurveyRegistry;
/// use blendkit_obs::SurveySpec;
///
/// let registry = SurveyRegistry::builtin();
/// let surveys = SurveySpec::from("Rubin").resolve(&registry).unwrap();
/// assert_eq!(surveys.len(), 1);
/// assert_eq!(surveys[0].name, "Rubin");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SurveySpec {
    /// A single survey, looked up in the registry.
    ByName(String),
    /// An ordered list of names and/or inline definitions.
    ByList(Vec<SurveyRef>),
}

impl SurveySpec {
    /// Resolve the spec into an ordered list of survey definitions.
    ///
    /// Registry names that are absent fail with
    /// [`GeneratorError::UnknownSurvey`]. Inline definitions are
    /// validated structurally before acceptance; an invalid inline
    /// definition fails with [`GeneratorError::InvalidSurveySpec`].
    /// Output order matches input order. An empty list resolves to an
    /// empty survey list (the generator then yields empty batches).
    pub fn resolve(&self, registry: &SurveyRegistry) -> Result<Vec<Survey>, GeneratorError> {
        match self {
            Self::ByName(name) => Ok(vec![lookup(registry, name)?]),
            Self::ByList(refs) => {
                refs.iter()
                    .map(|r| match r {
                        SurveyRef::Name(name) => lookup(registry, name),
                        SurveyRef::Inline(survey) => {
                            survey.validate().map_err(|reason| {
                                GeneratorError::InvalidSurveySpec { reason }
                            })?;
                            Ok(survey.clone())
                        }
                    })
                    .collect()
            }
        }
    }
}

fn lookup(registry: &SurveyRegistry, name: &str) -> Result<Survey, GeneratorError> {
    registry
        .get(name)
        .cloned()
        .ok_or_else(|| GeneratorError::UnknownSurvey {
            name: name.to_string(),
        })
}

impl From<&str> for SurveySpec {
    fn from(name: &str) -> Self {
        Self::ByName(name.to_string())
    }
}

impl From<String> for SurveySpec {
    fn from(name: String) -> Self {
        Self::ByName(name)
    }
}

impl From<Survey> for SurveySpec {
    fn from(survey: Survey) -> Self {
        Self::ByList(vec![SurveyRef::Inline(survey)])
    }
}

impl From<Vec<SurveyRef>> for SurveySpec {
    fn from(refs: Vec<SurveyRef>) -> Self {
        Self::ByList(refs)
    }
}

impl From<Vec<&str>> for SurveySpec {
    fn from(names: Vec<&str>) -> Self {
        Self::ByList(names.into_iter().map(SurveyRef::from).collect())
    }
}
