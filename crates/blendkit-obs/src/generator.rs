//! The observing generator: configuration, construction, and batch iteration.

use std::fmt;

use blendkit_core::{Cutout, CutoutError, GeneratorError, ObsConditions, Survey, SurveyRegistry};
use indexmap::IndexMap;

use crate::conditions::DefaultObsConditions;
use crate::spec::SurveySpec;

/// Default stamp size in arcseconds.
pub const DEFAULT_STAMP_SIZE: u32 = 24;

// ── GeneratorConfig ────────────────────────────────────────────────

/// Configuration for constructing an [`ObservingGenerator`].
///
/// `surveys` is the only required input; [`GeneratorConfig::new`] fills
/// the remaining fields with their defaults (`verbose = false`,
/// `stamp_size = 24`, default provider). Override fields directly
/// before passing the config to [`ObservingGenerator::new`].
pub struct GeneratorConfig {
    /// Which surveys to generate observing conditions for.
    pub surveys: SurveySpec,
    /// Observing-condition provider. `None` = derive conditions from
    /// the survey tables via [`DefaultObsConditions`].
    pub obs_conds: Option<Box<dyn ObsConditions>>,
    /// Verbosity flag, carried through to downstream pipeline stages.
    pub verbose: bool,
    /// Stamp size in arcseconds. A supplied provider must have been
    /// constructed with the same value.
    pub stamp_size: u32,
}

impl GeneratorConfig {
    /// Config with default provider, `verbose = false`, and
    /// [`DEFAULT_STAMP_SIZE`].
    pub fn new(surveys: impl Into<SurveySpec>) -> Self {
        Self {
            surveys: surveys.into(),
            obs_conds: None,
            verbose: false,
            stamp_size: DEFAULT_STAMP_SIZE,
        }
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("surveys", &self.surveys)
            .field("obs_conds", &self.obs_conds.as_ref().map(|p| p.stamp_size()))
            .field("verbose", &self.verbose)
            .field("stamp_size", &self.stamp_size)
            .finish()
    }
}

// ── ObservingGenerator ─────────────────────────────────────────────

/// One batch of observing conditions: survey name to cutouts, one per
/// band in band order. Survey order matches the resolution order of the
/// generator's [`SurveySpec`].
pub type ObservingBatch = IndexMap<String, Vec<Cutout>>;

/// Produces per-survey, per-band observing-condition batches, indefinitely.
///
/// Constructed once from a [`GeneratorConfig`] and a
/// [`SurveyRegistry`]; afterwards its state is immutable. Each call to
/// [`next_batch`](ObservingGenerator::next_batch) recomputes the batch
/// from scratch by invoking the provider for every (survey, band)
/// pair — there is no cursor and no stop condition. Bounding the stream
/// is the caller's responsibility (e.g. `generator.take(n)`).
///
/// # Examples
///
/// ```
/// use blendkit_core::SurveyRegistry;
/// use blendkit_obs::{GeneratorConfig, ObservingGenerator};
///
/// let registry = SurveyRegistry::builtin();
/// let generator =
///     ObservingGenerator::new(GeneratorConfig::new("Rubin"), &registry).unwrap();
/// let batch = generator.next_batch().unwrap();
/// assert_eq!(batch["Rubin"].len(), 6);
/// ```
pub struct ObservingGenerator {
    surveys: Vec<Survey>,
    verbose: bool,
    obs_conds: Box<dyn ObsConditions>,
}

impl ObservingGenerator {
    /// Construct a generator, resolving the survey spec and wiring the
    /// provider.
    ///
    /// Fails with [`GeneratorError::UnknownSurvey`] or
    /// [`GeneratorError::InvalidSurveySpec`] if the spec does not
    /// resolve, and with [`GeneratorError::StampSizeMismatch`] if a
    /// supplied provider's stamp size differs from `config.stamp_size`.
    /// All failures are fatal; no partial generator is produced.
    pub fn new(config: GeneratorConfig, registry: &SurveyRegistry) -> Result<Self, GeneratorError> {
        let surveys = config.surveys.resolve(registry)?;
        let obs_conds: Box<dyn ObsConditions> = match config.obs_conds {
            Some(provider) => {
                if provider.stamp_size() != config.stamp_size {
                    return Err(GeneratorError::StampSizeMismatch {
                        provider: provider.stamp_size(),
                        requested: config.stamp_size,
                    });
                }
                provider
            }
            None => Box::new(DefaultObsConditions::new(config.stamp_size)),
        };
        Ok(Self {
            surveys,
            verbose: config.verbose,
            obs_conds,
        })
    }

    /// Produce one observing-condition batch.
    ///
    /// Invokes the provider for every (survey, band) pair, in survey
    /// resolution order and band order. Provider errors propagate
    /// unchanged; this method introduces no failure modes of its own.
    pub fn next_batch(&self) -> Result<ObservingBatch, CutoutError> {
        let mut batch = ObservingBatch::with_capacity(self.surveys.len());
        for survey in &self.surveys {
            let mut cutouts = Vec::with_capacity(survey.bands.len());
            for band in &survey.bands {
                cutouts.push(self.obs_conds.cutout(survey, band)?);
            }
            batch.insert(survey.name.clone(), cutouts);
        }
        Ok(batch)
    }

    /// The resolved surveys, in spec order.
    pub fn surveys(&self) -> &[Survey] {
        &self.surveys
    }

    /// The verbosity flag given at construction.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// The stamp size the provider was constructed with.
    pub fn stamp_size(&self) -> u32 {
        self.obs_conds.stamp_size()
    }

    /// The observing-condition provider.
    pub fn obs_conds(&self) -> &dyn ObsConditions {
        self.obs_conds.as_ref()
    }
}

impl fmt::Debug for ObservingGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservingGenerator")
            .field("surveys", &self.surveys.len())
            .field("verbose", &self.verbose)
            .field("stamp_size", &self.obs_conds.stamp_size())
            .finish()
    }
}

/// Infinite stream of batches; `next()` never returns `None`.
impl Iterator for ObservingGenerator {
    type Item = Result<ObservingBatch, CutoutError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_batch())
    }
}
