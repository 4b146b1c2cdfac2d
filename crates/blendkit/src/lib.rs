//! Blendkit: survey and observing-condition generation for astronomical
//! image simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Blendkit sub-crates. For most users, adding `blendkit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use blendkit::prelude::*;
//!
//! // Observing conditions for the built-in Rubin survey plus a custom
//! // two-band instrument, at the default 24 arcsec stamp size.
//! let registry = SurveyRegistry::builtin();
//! let spec = SurveySpec::ByList(vec![
//!     SurveyRef::from("Rubin"),
//!     SurveyRef::from(Survey::new("Toy", ["g", "r"], 0.1)),
//! ]);
//! let generator = ObservingGenerator::new(GeneratorConfig::new(spec), &registry).unwrap();
//!
//! // The generator is an infinite stream; bound it with `take`.
//! for batch in generator.take(3) {
//!     let batch = batch.unwrap();
//!     assert_eq!(batch["Rubin"].len(), 6);
//!     assert_eq!(batch["Toy"].len(), 2);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `blendkit-core` | Surveys, the registry, cutouts, provider trait, errors |
//! | [`obs`] | `blendkit-obs` | Survey specs, the observing generator, the default provider |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Survey definitions, the registry, cutout records, and the provider
/// trait (`blendkit-core`).
pub use blendkit_core as types;

/// Survey specification, the observing generator, and the default
/// provider (`blendkit-obs`).
pub use blendkit_obs as obs;

/// Common imports for typical Blendkit usage.
///
/// ```rust
/// use blendkit::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use blendkit_core::{BandList, Cutout, ObsConditions, Survey, SurveyRegistry};

    // Errors
    pub use blendkit_core::{CutoutError, GeneratorError};

    // Generation
    pub use blendkit_obs::{
        DefaultObsConditions, GeneratorConfig, ObservingBatch, ObservingGenerator, SurveyRef,
        SurveySpec, DEFAULT_STAMP_SIZE,
    };
}
