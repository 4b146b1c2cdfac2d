//! Observing-condition cutout records.

use indexmap::IndexMap;

/// Observing conditions for one (survey, band) combination.
///
/// Produced by an [`ObsConditions`](crate::ObsConditions) provider and
/// consumed by the downstream rendering stages. The generator treats
/// cutouts as opaque values: it only collects them per survey in band
/// order and never inspects their contents.
#[derive(Clone, Debug, PartialEq)]
pub struct Cutout {
    /// Name of the survey this cutout belongs to.
    pub survey: String,
    /// Band this cutout describes.
    pub band: String,
    /// Stamp side length in pixels (the angular stamp size divided by
    /// the survey pixel scale, rounded).
    pub pix_stamp_size: u32,
    /// Pixel scale in arcseconds per pixel, copied from the survey.
    pub pixel_scale: f64,
    /// Survey-specific numeric parameters, passed through unmodified.
    pub params: IndexMap<String, f64>,
}
