//! Default observing-condition provider.

use blendkit_core::{Cutout, CutoutError, ObsConditions, Survey};

/// Provider that derives observing conditions from the survey tables.
///
/// This is the provider used when a generator is constructed without an
/// explicit one. It performs no physical modeling of its own: it checks
/// the band against the survey, converts the angular stamp size into
/// pixels using the survey's pixel scale, and passes the survey's
/// instrument parameters through to the cutout.
///
/// # Examples
///
/// ```
/// use blendkit_core::{ObsConditions, SurveyRegistry};
/// use blendkit_obs::DefaultObsConditions;
///
/// let registry = SurveyRegistry::builtin();
/// let provider = DefaultObsConditions::new(24);
/// let cutout = provider.cutout(registry.get("Rubin").unwrap(), "r").unwrap();
/// // 24 arcsec at 0.2 arcsec/pixel.
/// assert_eq!(cutout.pix_stamp_size, 120);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DefaultObsConditions {
    stamp_size: u32,
}

impl DefaultObsConditions {
    /// Create a provider for the given stamp size (arcseconds).
    pub fn new(stamp_size: u32) -> Self {
        Self { stamp_size }
    }
}

impl ObsConditions for DefaultObsConditions {
    fn stamp_size(&self) -> u32 {
        self.stamp_size
    }

    fn cutout(&self, survey: &Survey, band: &str) -> Result<Cutout, CutoutError> {
        if !survey.has_band(band) {
            return Err(CutoutError::UnknownBand {
                survey: survey.name.clone(),
                band: band.to_string(),
            });
        }
        let pix = (f64::from(self.stamp_size) / survey.pixel_scale).round();
        // pixel_scale is validated at resolution time, but a provider
        // cannot assume the survey it is handed came through resolution.
        if !pix.is_finite() || pix < 1.0 || pix > f64::from(u32::MAX) {
            return Err(CutoutError::ExecutionFailed {
                reason: format!(
                    "stamp_size {} at pixel_scale {} gives unusable pixel dimension {pix}",
                    self.stamp_size, survey.pixel_scale,
                ),
            });
        }
        Ok(Cutout {
            survey: survey.name.clone(),
            band: band.to_string(),
            pix_stamp_size: pix as u32,
            pixel_scale: survey.pixel_scale,
            params: survey.extra.clone(),
        })
    }
}
