//! Error types for ARIA audit

use thiserror::Error;

/// Error raised when a collaborator cannot answer for an element
#[derive(Debug, Error)]
#[error("Resolver failed for <{tag}>: {message}")]
pub struct ResolverError {
    pub tag: String,
    pub message: String,
}

/// General audit error type
#[derive(Debug, Error)]
pub enum AuditError {
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

impl AuditError {
    /// Shorthand for a resolver failure on a given tag
    pub fn resolver(tag: impl Into<String>, message: impl Into<String>) -> Self {
        ResolverError {
            tag: tag.into(),
            message: message.into(),
        }
        .into()
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_error_message() {
        let err = AuditError::resolver("div", "table unavailable");
        assert_eq!(err.to_string(), "Resolver failed for <div>: table unavailable");
        assert!(matches!(err, AuditError::Resolver(_)));
    }

    #[test]
    fn test_config_error_message() {
        let err = AuditError::Config("bad table".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad table");
    }
}
