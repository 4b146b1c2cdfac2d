//! Core types and traits for the Blendkit image-simulation toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Blendkit workspace:
//! survey definitions, the survey registry, observing-condition cutout
//! records, the provider trait, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cutout;
mod error;
mod provider;
mod registry;
mod survey;

pub use cutout::Cutout;
pub use error::{CutoutError, GeneratorError};
pub use provider::ObsConditions;
pub use registry::SurveyRegistry;
pub use survey::{BandList, Survey};
