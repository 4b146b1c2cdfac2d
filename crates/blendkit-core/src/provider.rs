//! The observing-condition provider trait.

use crate::cutout::Cutout;
use crate::error::CutoutError;
use crate::survey::Survey;

/// Source of per-band observing conditions.
///
/// A provider is constructed with a stamp size and, given a survey
/// definition and one of its bands, computes the observing-condition
/// [`Cutout`] for that combination. This trait decouples the generator
/// from the physical model: the generator iterates surveys and bands,
/// the provider owns the optics/noise computation.
///
/// Implementations must report the stamp size they were built with via
/// [`stamp_size`](ObsConditions::stamp_size); the generator rejects a
/// provider whose stamp size differs from the one requested at
/// construction.
pub trait ObsConditions {
    /// The stamp size (arcseconds) this provider was constructed with.
    fn stamp_size(&self) -> u32;

    /// Compute the observing conditions for one survey band.
    ///
    /// Errors are propagated to the generator's caller unchanged.
    fn cutout(&self, survey: &Survey, band: &str) -> Result<Cutout, CutoutError>;
}
