//! Errors raised by the domain layer. All of them mean the input was rejected.

use thiserror::Error;

/// Raised only at the entry points that must reject input outright (module
/// naming, document parsing, setting type parsing). Best-effort parsing of
/// descriptor entries and multi-line input never produces these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid vendor prefix '{prefix}': expected 2 to 4 lowercase latin letters")]
    InvalidVendorPrefix { prefix: String },

    #[error("Invalid module name '{name}': expected UpperCamelCase, 2 to 64 characters")]
    InvalidModuleName { name: String },

    #[error("Unknown setting type: {0}")]
    UnknownSettingType(String),

    #[error("Invalid module descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Invalid module form: {0}")]
    InvalidForm(String),

    #[error("Invalid generation options: {0}")]
    InvalidOptions(String),
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidVendorPrefix { prefix } => vec![
                format!("'{}' is not a valid vendor prefix", prefix),
                "Use 2 to 4 lowercase latin letters, e.g. 'oxps' or 'ab'".into(),
            ],
            Self::InvalidModuleName { name } => vec![
                format!("'{}' is not a valid module name", name),
                "Start with an uppercase letter, then letters and digits only".into(),
                "Examples: MyModule, Checkout2Go, ProductFeed".into(),
            ],
            Self::UnknownSettingType(kind) => vec![
                format!("Setting type '{}' is not supported", kind),
                "Supported types: bool, str, num, arr, aarr, select".into(),
            ],
            Self::InvalidDescriptor(msg) => vec![
                "The metadata file could not be read as a module descriptor".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidForm(msg) => vec![
                "Check the module form file syntax".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidOptions(msg) => vec![
                "Generation options are the JSON printed by 'modgen parse'".into(),
                format!("Details: {}", msg),
            ],
        }
    }
}
