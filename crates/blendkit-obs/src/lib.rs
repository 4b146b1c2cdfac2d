//! Observing-condition generation for Blendkit simulations.
//!
//! Resolves a [`SurveySpec`] against a survey registry and produces
//! per-survey, per-band cutout batches from an
//! [`ObsConditions`](blendkit_core::ObsConditions) provider, indefinitely.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod conditions;
mod generator;
mod spec;

pub use conditions::DefaultObsConditions;
pub use generator::{GeneratorConfig, ObservingBatch, ObservingGenerator, DEFAULT_STAMP_SIZE};
pub use spec::{SurveyRef, SurveySpec};
