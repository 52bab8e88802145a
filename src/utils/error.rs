use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlimError {
    #[error("Member does not exist: {name}")]
    MissingMember { name: String },

    #[error("Field does not exist: {name}")]
    MissingField { name: String },

    #[error("Cannot construct target: {message}")]
    Construction { message: String },

    #[error("Member '{member}' failed: {message}")]
    Invocation { member: String, message: String },

    #[error("Path '{path}' does not traverse a document")]
    NotADocument { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Projection,
    Reconstruction,
    Configuration,
    System,
}

impl SlimError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SlimError::MissingMember { .. }
            | SlimError::MissingField { .. }
            | SlimError::Invocation { .. }
            | SlimError::NotADocument { .. } => ErrorCategory::Projection,
            SlimError::Construction { .. } => ErrorCategory::Reconstruction,
            SlimError::TomlError(_)
            | SlimError::ConfigError { .. }
            | SlimError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SlimError::IoError(_) | SlimError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Projection | ErrorCategory::Reconstruction => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SlimError>;
