//! Error types for Sandbook

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SandbookError>;

#[derive(Error, Debug)]
pub enum SandbookError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Wikipedia API error: {0}")]
    Client(#[from] ClientError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Missing required path: {0}")]
    MissingPath(String),
}

/// Failures of the remote content client.
///
/// Every variant is terminal for the navigation attempt that raised
/// it: the controller converts it to a display string, surfaces a
/// notification, and never retries.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The transport call failed or returned a non-success status.
    #[error("Network error: {0}")]
    Transport(String),

    /// The API answered with an `{"error": {"info": ...}}` envelope.
    #[error("{0}")]
    Api(String),

    /// The page is missing (sentinel page id after redirect resolution).
    #[error("Page not found: {0}")]
    NotFound(String),

    /// The random-title call parsed but contained no title.
    #[error("No random title received")]
    NoTitle,

    /// The response body was not the JSON shape we expect.
    #[error("Unexpected API response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_formatting() {
        let transport = ClientError::Transport("connection refused".to_string());
        assert_eq!(
            format!("{}", transport),
            "Network error: connection refused"
        );

        let api = ClientError::Api("The page you specified doesn't exist.".to_string());
        assert_eq!(format!("{}", api), "The page you specified doesn't exist.");

        let not_found = ClientError::NotFound("DoesNotExist".to_string());
        assert_eq!(format!("{}", not_found), "Page not found: DoesNotExist");

        assert_eq!(format!("{}", ClientError::NoTitle), "No random title received");
    }

    #[test]
    fn test_error_conversion_from_client_error() {
        let err: SandbookError = ClientError::NoTitle.into();
        match err {
            SandbookError::Client(ClientError::NoTitle) => {}
            other => panic!("Expected Client(NoTitle), got {:?}", other),
        }
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let err: SandbookError = ConfigError::MissingPath("config directory".to_string()).into();
        match err {
            SandbookError::Config(_) => {}
            other => panic!("Expected Config, got {:?}", other),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_err() -> Result<()> {
            Err(SandbookError::InvalidInput("empty title".to_string()))
        }

        let message = format!("{}", returns_err().unwrap_err());
        assert_eq!(message, "Invalid input: empty title");
    }
}
