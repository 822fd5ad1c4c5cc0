//! Configuration types for Strand generation operations.
//!
//! Controls entropy health verification and the sample size the health
//! checks run against.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::{
    error::{GenerationError, Result},
    source::health::{DEFAULT_SAMPLE_BYTES, MIN_SAMPLE_BYTES},
};

/// Generator configuration settings.
///
/// Settings here affect every call made through [`crate::generate_with_config`].
/// The convenience facade [`crate::generate`] always uses the default
/// configuration.
///
/// # Examples
/// ```rust
/// use strand_core::GeneratorConfig;
///
/// // Verify entropy against a larger sample
/// let config = GeneratorConfig::new()
///     .with_health_sample_size(512)
///     .build()
///     .expect("Failed to build config");
///
/// // Skip verification entirely, e.g. for benchmarks
/// let dev_config = GeneratorConfig::for_development();
///
/// // Production settings
/// let prod_config = GeneratorConfig::for_production();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Whether generated output must pass entropy health checks.
    ///
    /// When enabled, the CSPRNG is certified against statistical health
    /// tests before its output is handed out, and every returned buffer
    /// is screened for stuck-output faults.
    /// Default: `true`
    pub verify_entropy: bool,

    /// Number of bytes drawn for the CSPRNG certification sample.
    ///
    /// Must be at least [`MIN_SAMPLE_BYTES`]; the statistical tests are
    /// meaningless below that.
    /// Default: [`DEFAULT_SAMPLE_BYTES`]
    pub health_sample_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            // Verification is on by default; disable per call for
            // benchmarks or tests that only exercise plumbing.
            verify_entropy: true,

            // 256 bytes is the smallest sample all health checks have
            // reasonable statistical power at.
            health_sample_size: DEFAULT_SAMPLE_BYTES,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for development and benchmarking.
    ///
    /// Disables entropy health verification. Not suitable for production
    /// use.
    #[must_use]
    pub fn for_development() -> Self {
        Self::default().with_verify_entropy(false)
    }

    /// Create a configuration for production environments.
    ///
    /// Keeps verification enabled and doubles the certification sample
    /// for tighter statistical bounds.
    #[must_use]
    pub fn for_production() -> Self {
        Self::default().with_health_sample_size(DEFAULT_SAMPLE_BYTES * 2)
    }

    /// Set entropy verification and return self for method chaining.
    #[must_use]
    pub fn with_verify_entropy(mut self, enabled: bool) -> Self {
        self.verify_entropy = enabled;
        self
    }

    /// Set the health sample size and return self for method chaining.
    #[must_use]
    pub fn with_health_sample_size(mut self, bytes: usize) -> Self {
        self.health_sample_size = bytes;
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the health sample size is below
    /// [`MIN_SAMPLE_BYTES`] while verification is enabled.
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the health sample size is below
    /// [`MIN_SAMPLE_BYTES`] while verification is enabled.
    pub fn validate(&self) -> Result<()> {
        if self.verify_entropy && self.health_sample_size < MIN_SAMPLE_BYTES {
            return Err(GenerationError::InvalidConfiguration(format!(
                "Health sample size must be at least {MIN_SAMPLE_BYTES} bytes, got {}",
                self.health_sample_size
            )));
        }

        Ok(())
    }
}
