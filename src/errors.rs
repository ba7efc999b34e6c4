use thiserror::Error;

/// Reasons an expense submission is turned away before it reaches the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expense name must not be empty")]
    EmptyName,
    #[error("expense amount must be greater than zero")]
    NonPositiveAmount,
}

/// Failures raised while loading, saving, or editing display preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },
}
