use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("window state error: {0}")]
    StateError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::StateError("bad geometry".into());
        assert_eq!(err.to_string(), "window state error: bad geometry");
    }

    #[test]
    fn validation_error_display() {
        let err = ConfigError::ValidationError("titlebar too tall".into());
        assert_eq!(err.to_string(), "config validation error: titlebar too tall");
    }
}
