//! Test utilities and mock providers for Blendkit development.
//!
//! Provides mock implementations of the
//! [`ObsConditions`](blendkit_core::ObsConditions) provider contract
//! and survey fixtures for generator tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{custom_registry, two_band_survey};

use std::sync::atomic::{AtomicUsize, Ordering};

use blendkit_core::{Cutout, CutoutError, ObsConditions, Survey};

/// Provider returning a deterministic marker cutout per (survey, band).
///
/// The marker is fully determined by its inputs: every call with the
/// same survey and band returns an identical cutout, so repeated
/// batches can be compared with `assert_eq!`. The `pix_stamp_size`
/// field carries the provider's stamp size unchanged (no pixel-scale
/// conversion), which distinguishes mock cutouts from
/// `DefaultObsConditions` output in mixed tests.
pub struct MockObsConditions {
    stamp_size: u32,
}

impl MockObsConditions {
    pub fn new(stamp_size: u32) -> Self {
        Self { stamp_size }
    }
}

impl ObsConditions for MockObsConditions {
    fn stamp_size(&self) -> u32 {
        self.stamp_size
    }

    fn cutout(&self, survey: &Survey, band: &str) -> Result<Cutout, CutoutError> {
        Ok(Cutout {
            survey: survey.name.clone(),
            band: band.to_string(),
            pix_stamp_size: self.stamp_size,
            pixel_scale: survey.pixel_scale,
            params: survey.extra.clone(),
        })
    }
}

/// Provider that fails deterministically after N successful cutouts.
///
/// Call 0 through N-1 succeed (delegating to the same marker scheme as
/// [`MockObsConditions`]); call N and every call after it fail with
/// [`CutoutError::ExecutionFailed`]. Useful for testing that provider
/// errors surface from batch production unwrapped.
pub struct FailingObsConditions {
    stamp_size: u32,
    fail_after: usize,
    calls: AtomicUsize,
}

impl FailingObsConditions {
    pub fn new(stamp_size: u32, fail_after: usize) -> Self {
        Self {
            stamp_size,
            fail_after,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of cutout calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl ObsConditions for FailingObsConditions {
    fn stamp_size(&self) -> u32 {
        self.stamp_size
    }

    fn cutout(&self, survey: &Survey, band: &str) -> Result<Cutout, CutoutError> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        if call >= self.fail_after {
            return Err(CutoutError::ExecutionFailed {
                reason: format!(
                    "deliberate failure on cutout call {call} ({}/{band})",
                    survey.name,
                ),
            });
        }
        Ok(Cutout {
            survey: survey.name.clone(),
            band: band.to_string(),
            pix_stamp_size: self.stamp_size,
            pixel_scale: survey.pixel_scale,
            params: survey.extra.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_cutout_is_deterministic() {
        let provider = MockObsConditions::new(24);
        let survey = two_band_survey();
        let a = provider.cutout(&survey, "g").unwrap();
        let b = provider.cutout(&survey, "g").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.pix_stamp_size, 24);
    }

    #[test]
    fn failing_provider_fails_at_threshold() {
        let provider = FailingObsConditions::new(24, 2);
        let survey = two_band_survey();
        assert!(provider.cutout(&survey, "g").is_ok());
        assert!(provider.cutout(&survey, "r").is_ok());
        assert!(provider.cutout(&survey, "g").is_err());
        assert_eq!(provider.calls(), 3);
    }
}
