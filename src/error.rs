//! Error types for pipeline construction
//!
//! Every error is raised while a pipeline is being assembled: resolving stage
//! names, checking options, validating a recipe or loading table data. Running
//! an assembled pipeline never fails.

use thiserror::Error;

/// Errors raised while building a transliteration pipeline
#[derive(Debug, Error)]
pub enum TransliterationError {
    /// No stage is registered under this name
    #[error("unknown stage '{name}'")]
    UnknownStage { name: String },

    /// The options supplied do not belong to the stage
    #[error("options mismatch for stage '{stage}': expected {expected}, provided {provided}")]
    OptionsMismatch {
        stage: String,
        expected: &'static str,
        provided: &'static str,
    },

    /// Mutually exclusive recipe options were enabled together
    #[error("mutually exclusive options: {0}")]
    ConflictingOptions(String),

    /// A table-driven stage was built without its table
    #[error("missing table '{table}' required by stage '{stage}'")]
    MissingTable { stage: String, table: String },

    /// Table data could not be decoded
    #[error("malformed table '{table}': {reason}")]
    MalformedTable { table: String, reason: String },

    /// A transliterator needs at least one stage
    #[error("pipeline has no stages")]
    EmptyPipeline,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for pipeline construction
pub type Result<T> = std::result::Result<T, TransliterationError>;
