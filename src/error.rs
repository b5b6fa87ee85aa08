//! Error types for the cvd_assist library

use thiserror::Error;

/// Result type alias for cvd_assist operations
pub type Result<T> = std::result::Result<T, AssistError>;

/// Error types for configuration and setup of the color engine.
///
/// Per-frame transforms and per-pixel naming are infallible for well-formed
/// input; every variant here is a configuration-time failure detected when a
/// namer or config is constructed, never per call.
#[derive(Error, Debug)]
pub enum AssistError {
    /// Config file could not be read or written
    #[error("Failed to access config file: {message}")]
    ConfigIoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file contained invalid JSON
    #[error("Failed to parse config: {message}")]
    ConfigParseError {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A color namer was constructed with no dictionary entries
    #[error("Color dictionary is empty: at least one named entry is required")]
    EmptyDictionary,

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl AssistError {
    /// Create a config I/O error with context
    pub fn config_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConfigIoError {
            message: message.into(),
            source,
        }
    }

    /// Create a config parse error with context
    pub fn config_parse(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ConfigParseError {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AssistError::ConfigIoError { .. } => {
                "Could not read the configuration file. Please check the path and try again."
                    .to_string()
            }
            AssistError::ConfigParseError { .. } => {
                "The configuration file is not valid JSON. Please fix it or regenerate defaults."
                    .to_string()
            }
            AssistError::EmptyDictionary => {
                "The color dictionary has no entries. Add at least one named color.".to_string()
            }
            AssistError::InvalidParameter { parameter, value } => {
                format!("The setting '{}' has an invalid value '{}'.", parameter, value)
            }
        }
    }
}
