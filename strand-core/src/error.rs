//! Error types for Strand generation operations.
//!
//! Provides a classified error enum covering request validation, entropy
//! source availability, output quality checks, and power-up self-tests,
//! plus a plain-text report renderer for CLI and web front ends.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Errors that can occur while generating random bytes.
///
/// Every failure is classified and returned to the caller; no error
/// condition terminates the process.
///
/// `Display` and `Error` are implemented by hand rather than derived with
/// `thiserror`: several variants carry a `source` field holding an entropy
/// source *identifier*, and `thiserror` unconditionally treats any field
/// named `source` as the error's cause (requiring it to implement `Error`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Requested byte count is below the minimum, or was not a number.
    InvalidLength {
        /// Minimum number of bytes a request must ask for.
        minimum: usize,
        /// The rejected value, as supplied by the caller.
        actual: String,
    },

    /// Requested entropy source identifier is not recognized.
    UnknownSource(String),

    /// Entropy source exists but could not produce bytes.
    Unavailable {
        /// Identifier of the source that failed.
        source: &'static str,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Entropy source produced bytes but declined to certify them as strong.
    ///
    /// The bytes are discarded; nothing weak is ever returned to the caller.
    WeakRandomness {
        /// Which health check rejected the output, and why.
        details: String,
    },

    /// Entropy source does not exist on the current platform.
    PlatformUnsupported {
        /// Identifier of the requested source.
        source: &'static str,
        /// Operating system the process is running on.
        platform: &'static str,
    },

    /// Entropy device read returned fewer bytes than requested, or failed.
    ReadFailure {
        /// Number of bytes the caller asked for.
        requested: usize,
        /// Number of bytes actually read before the failure.
        obtained: usize,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Power-up self-test failed.
    ///
    /// The deployment is unusable: a digest known-answer test or the
    /// CSPRNG smoke test did not produce the expected result.
    SelfTestFailed {
        /// Component that failed the self-test.
        component: String,
        /// Status or details of the failure.
        status: String,
    },

    /// Configuration validation error.
    InvalidConfiguration(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { minimum, actual } => write!(
                f,
                "Invalid length: at least {minimum} bytes must be requested, got {actual}"
            ),
            Self::UnknownSource(source) => write!(f, "Unknown entropy source: {source}"),
            Self::Unavailable { source, reason } => {
                write!(f, "Entropy source unavailable: {source}. Reason: {reason}")
            }
            Self::WeakRandomness { details } => {
                write!(f, "Weak randomness detected: {details}")
            }
            Self::PlatformUnsupported { source, platform } => write!(
                f,
                "Platform unsupported: {source} is not available on {platform}"
            ),
            Self::ReadFailure {
                requested,
                obtained,
                reason,
            } => write!(
                f,
                "Entropy device read failed: requested {requested} bytes, obtained {obtained}. Reason: {reason}"
            ),
            Self::SelfTestFailed { component, status } => {
                write!(f, "Self-test failed: {component}. Status: {status}")
            }
            Self::InvalidConfiguration(message) => {
                write!(f, "Configuration error: {message}")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

impl GenerationError {
    /// Stable machine-readable tag for this error's classification.
    ///
    /// Useful for log fields and report rendering; the tag never changes
    /// even if the human-readable message is reworded.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "invalid_length",
            Self::UnknownSource(_) => "unknown_source",
            Self::Unavailable { .. } => "unavailable",
            Self::WeakRandomness { .. } => "weak_randomness",
            Self::PlatformUnsupported { .. } => "platform_unsupported",
            Self::ReadFailure { .. } => "read_failure",
            Self::SelfTestFailed { .. } => "self_test_failed",
            Self::InvalidConfiguration(_) => "invalid_configuration",
        }
    }
}

/// Line separator used when rendering an error report.
///
/// Callers choose the separator explicitly; the library never inspects
/// the execution environment to guess one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    /// `\n`, for terminals and log files.
    LineFeed,
    /// `<br />`, for HTML output.
    HtmlBreak,
}

impl LineBreak {
    /// The separator string this variant renders as.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LineFeed => "\n",
            Self::HtmlBreak => "<br />",
        }
    }
}

/// Renders a human-readable error report with the requested separator.
///
/// The report carries the error message followed by its classification
/// tag, each line terminated by `line_break`.
#[must_use]
pub fn render_report(error: &GenerationError, line_break: LineBreak) -> String {
    let sep = line_break.as_str();
    format!("{error}{sep}({}){sep}", error.kind())
}

/// A specialized Result type for Strand generation operations.
pub type Result<T> = std::result::Result<T, GenerationError>;
