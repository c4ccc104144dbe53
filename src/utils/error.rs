use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Expected a JSON list at {path}, got {found}")]
    UnexpectedShape { path: String, found: &'static str },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReportError {
    /// Short message for terminal output, without the wrapped source chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::IoError(e) => format!("Could not read input: {}", e),
            ReportError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            ReportError::UnexpectedShape { .. } => self.to_string(),
            ReportError::ConfigError { message } => format!("Configuration problem: {}", message),
            ReportError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::IoError(_) => "Check that the file exists and is readable",
            ReportError::SerializationError(_) => "Validate the file with a JSON linter",
            ReportError::UnexpectedShape { .. } => {
                "Wrap the records in a top-level JSON array: [{...}, {...}]"
            }
            ReportError::ConfigError { .. }
            | ReportError::InvalidConfigValueError { .. } => {
                "Review the TOML configuration file and command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
