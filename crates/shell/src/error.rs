use mentorconnect_core::CoreError;

/// Shell-level error type.
///
/// Wraps [`CoreError`] for domain errors and adds shell-specific variants.
/// Validation outcomes are never errors — they are verdicts; this type
/// covers wiring mistakes and transport failures only.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A domain-level error from `mentorconnect-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A value was supplied for a field id the schema does not declare.
    #[error("Unknown field '{0}' for this form")]
    UnknownField(String),

    /// The submission transport failed.
    #[error("Submission failed: {0}")]
    Transport(String),
}

/// Convenience alias for shell results.
pub type ShellResult<T> = Result<T, ShellError>;
