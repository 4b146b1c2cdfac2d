//! Long-stream stability: the generator neither errors nor terminates
//! on its own when the provider never fails.

use blendkit_core::SurveyRegistry;
use blendkit_obs::{GeneratorConfig, ObservingGenerator};
use blendkit_test_utils::{two_band_survey, MockObsConditions};

#[test]
fn thousand_batches_from_mock_provider() {
    let registry = SurveyRegistry::builtin();
    let mut config = GeneratorConfig::new(two_band_survey());
    config.obs_conds = Some(Box::new(MockObsConditions::new(24)));
    let generator = ObservingGenerator::new(config, &registry).unwrap();

    let first = generator.next_batch().unwrap();
    for step in 0..1000 {
        let batch = generator.next_batch().unwrap_or_else(|e| {
            panic!("batch {step} failed: {e}");
        });
        assert_eq!(batch, first, "batch {step} diverged");
    }
}

#[test]
fn thousand_batches_from_default_provider() {
    let registry = SurveyRegistry::builtin();
    let config = GeneratorConfig::new(vec!["Rubin", "HSC"]);
    let generator = ObservingGenerator::new(config, &registry).unwrap();

    for result in generator.take(1000) {
        let batch = result.expect("default provider never fails on builtin surveys");
        assert_eq!(batch["Rubin"].len(), 6);
        assert_eq!(batch["HSC"].len(), 5);
    }
}
