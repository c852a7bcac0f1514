use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsaError {
    #[error("Could not parse. Try '225-A:24' or 'RSA 225-A'.")]
    ParseError,

    #[error("Bad chapter format: {chapter}")]
    BadChapterFormat { chapter: String },

    /// `reason` is for logs only; users always see the same message.
    #[error("Could not load mapping JSON.")]
    MappingLoadError { reason: String },

    #[error("Could not determine title folder for chapter {chapter}")]
    MissingFolder { chapter: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Table of contents error: {message}")]
    TocError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Mapping,
    Configuration,
    System,
}

impl RsaError {
    pub fn mapping_load(reason: impl Into<String>) -> Self {
        RsaError::MappingLoadError {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RsaError::ParseError | RsaError::BadChapterFormat { .. } => ErrorCategory::Input,
            RsaError::MappingLoadError { .. } | RsaError::MissingFolder { .. } => {
                ErrorCategory::Mapping
            }
            RsaError::ConfigError { .. } | RsaError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            RsaError::TocError { .. }
            | RsaError::IoError(_)
            | RsaError::HttpError(_)
            | RsaError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Text shown in place of a result.
    pub fn user_friendly_message(&self) -> String {
        self.to_string()
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RsaError::ParseError => "Enter a chapter such as 225-A, optionally followed by :section",
            RsaError::BadChapterFormat { .. } => {
                "Chapters are digits, optionally followed by a hyphen and letters"
            }
            RsaError::MappingLoadError { .. } => {
                "Check that the mapping location is reachable, or run rebuild-mapping"
            }
            RsaError::MissingFolder { .. } => {
                "The chapter may be repealed or missing from the mapping; try rebuild-mapping"
            }
            RsaError::ConfigError { .. } | RsaError::InvalidConfigValueError { .. } => {
                "Check the command line flags and config file"
            }
            RsaError::TocError { .. } => "Check the table of contents source",
            RsaError::IoError(_) => "Check file paths and permissions",
            RsaError::HttpError(_) => "Check network connectivity",
            RsaError::SerializationError(_) => "Check that the JSON document is well formed",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Mapping => 2,
            ErrorCategory::Configuration => 3,
            ErrorCategory::System => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, RsaError>;
