//! Error types for generator construction and cutout production.
//!
//! Organized by subsystem: [`GeneratorError`] covers survey-spec
//! resolution and provider wiring at construction time;
//! [`CutoutError`] covers provider failures during batch production.

use std::error::Error;
use std::fmt;

/// Errors detected while constructing an observing generator.
///
/// All variants are fatal to construction: no partial generator is
/// usable, and nothing is retried internally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// A survey name was not found in the registry.
    UnknownSurvey {
        /// The name that failed to resolve.
        name: String,
    },
    /// The survey specification is structurally invalid.
    InvalidSurveySpec {
        /// Description of the validation failure.
        reason: String,
    },
    /// A caller-supplied provider's stamp size differs from the
    /// requested stamp size.
    StampSizeMismatch {
        /// Stamp size reported by the provider.
        provider: u32,
        /// Stamp size requested at construction.
        requested: u32,
    },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSurvey { name } => {
                write!(f, "survey '{name}' is not in the registry")
            }
            Self::InvalidSurveySpec { reason } => {
                write!(f, "invalid survey spec: {reason}")
            }
            Self::StampSizeMismatch {
                provider,
                requested,
            } => {
                write!(
                    f,
                    "provider stamp_size {provider} does not match requested stamp_size {requested}",
                )
            }
        }
    }
}

impl Error for GeneratorError {}

/// Errors from an [`ObsConditions`](crate::ObsConditions) provider.
///
/// The generator never produces these itself; it propagates them
/// unchanged from [`ObsConditions::cutout`](crate::ObsConditions::cutout),
/// since it has no basis for deciding whether they are recoverable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CutoutError {
    /// The requested band is not defined by the survey.
    UnknownBand {
        /// Name of the survey.
        survey: String,
        /// The band that was requested.
        band: String,
    },
    /// The provider failed to compute observing conditions.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for CutoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBand { survey, band } => {
                write!(f, "survey '{survey}' has no band '{band}'")
            }
            Self::ExecutionFailed { reason } => {
                write!(f, "cutout computation failed: {reason}")
            }
        }
    }
}

impl Error for CutoutError {}
