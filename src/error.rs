use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Completion call failed; carries the raw upstream message.
    #[error("{0}")]
    Completion(String),

    #[error(transparent)]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn completion(msg: impl Into<String>) -> Self {
        Self::Completion(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_completion_error_keeps_raw_message() {
        let err = Error::completion("upstream connection reset");
        assert_eq!(err.to_string(), "upstream connection reset");
    }

    #[test]
    fn test_config_error_is_prefixed() {
        let err = Error::config("PORT must be a number");
        assert_eq!(err.to_string(), "Configuration error: PORT must be a number");
    }
}
