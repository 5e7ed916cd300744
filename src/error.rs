use thiserror::Error;

/// Coarse classification of failures, so callers can branch on what went
/// wrong instead of matching display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never completed (timeout, connection refused, transport).
    Network,
    /// The server answered with a non-2xx status.
    HttpStatus,
    /// The body could not be parsed into the expected shape.
    Parse,
    /// The request succeeded but the expected record was absent.
    NotFound,
    /// Everything else (configuration, I/O, logging setup).
    Other,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Content-specific business logic errors
    #[error("Tournament not found: {document_id}")]
    TournamentNotFound { document_id: String },

    #[error("Calendar event not found: id={event_id}")]
    CalendarEventNotFound { event_id: i64 },

    #[error("News post not found: {document_id}")]
    NewsPostNotFound { document_id: String },

    #[error("Record not found: {resource} {id}")]
    RecordNotFound { resource: String, id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("{0}")]
    Custom(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a tournament not found error
    pub fn tournament_not_found(document_id: impl Into<String>) -> Self {
        Self::TournamentNotFound {
            document_id: document_id.into(),
        }
    }

    /// Create a calendar event not found error
    pub fn calendar_event_not_found(event_id: i64) -> Self {
        Self::CalendarEventNotFound { event_id }
    }

    /// Create a news post not found error
    pub fn news_post_not_found(document_id: impl Into<String>) -> Self {
        Self::NewsPostNotFound {
            document_id: document_id.into(),
        }
    }

    /// Create a generic record not found error
    pub fn record_not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::RecordNotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Classify the error so callers can branch on kind rather than text.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NetworkTimeout { .. } | AppError::NetworkConnection { .. } => {
                ErrorKind::Network
            }
            AppError::ApiFetch(e) => {
                if e.is_status() {
                    ErrorKind::HttpStatus
                } else if e.is_decode() {
                    ErrorKind::Parse
                } else {
                    ErrorKind::Network
                }
            }
            AppError::ApiNotFound { .. }
            | AppError::ApiServerError { .. }
            | AppError::ApiClientError { .. }
            | AppError::ApiRateLimit { .. }
            | AppError::ApiServiceUnavailable { .. } => ErrorKind::HttpStatus,
            AppError::ApiParse(_)
            | AppError::ApiMalformedJson { .. }
            | AppError::ApiUnexpectedStructure { .. }
            | AppError::ApiNoData { .. } => ErrorKind::Parse,
            AppError::TournamentNotFound { .. }
            | AppError::CalendarEventNotFound { .. }
            | AppError::NewsPostNotFound { .. }
            | AppError::RecordNotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::Other,
        }
    }

    /// Check if error is retryable (network issues, server errors, rate limits)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiServiceUnavailable { .. }
                | AppError::ApiRateLimit { .. }
        )
    }

    /// Check if error indicates data not found (business logic, not technical error)
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound) || matches!(self, AppError::ApiNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_api_not_found_helper() {
        let error = AppError::api_not_found("https://api.example.com/api/tournaments/abc");
        assert!(matches!(error, AppError::ApiNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "API request not found (404): https://api.example.com/api/tournaments/abc"
        );
    }

    #[test]
    fn test_api_server_error_helper() {
        let error =
            AppError::api_server_error(500, "Internal server error", "https://api.example.com");
        assert!(matches!(error, AppError::ApiServerError { .. }));
        assert_eq!(
            error.to_string(),
            "API server error (500): Internal server error (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_network_error_helpers() {
        let error = AppError::network_timeout("https://api.example.com");
        assert!(matches!(error, AppError::NetworkTimeout { .. }));
        assert_eq!(error.kind(), ErrorKind::Network);

        let error = AppError::network_connection("https://api.example.com", "Connection refused");
        assert_eq!(
            error.to_string(),
            "Connection failed to: https://api.example.com - Connection refused"
        );
        assert_eq!(error.kind(), ErrorKind::Network);
    }

    #[test]
    fn test_parse_error_helpers() {
        let error = AppError::api_malformed_json("Response is not valid JSON", "https://a.ge");
        assert_eq!(error.kind(), ErrorKind::Parse);

        let error = AppError::api_unexpected_structure("missing field `data`", "https://a.ge");
        assert_eq!(error.kind(), ErrorKind::Parse);

        let error = AppError::api_no_data("Response body is empty", "https://a.ge");
        assert_eq!(error.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_record_not_found_helpers() {
        let error = AppError::tournament_not_found("x1y2z3");
        assert_eq!(error.to_string(), "Tournament not found: x1y2z3");
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(error.is_not_found());

        let error = AppError::calendar_event_not_found(42);
        assert_eq!(error.to_string(), "Calendar event not found: id=42");
        assert!(error.is_not_found());

        let error = AppError::news_post_not_found("abc");
        assert!(error.is_not_found());

        let error = AppError::record_not_found("federation", "f9");
        assert_eq!(error.to_string(), "Record not found: federation f9");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(AppError::api_not_found("url").kind(), ErrorKind::HttpStatus);
        assert_eq!(
            AppError::api_rate_limit("slow down", "url").kind(),
            ErrorKind::HttpStatus
        );
        assert_eq!(
            AppError::api_client_error(400, "bad request", "url").kind(),
            ErrorKind::HttpStatus
        );
        assert_eq!(AppError::config_error("nope").kind(), ErrorKind::Other);
        assert_eq!(
            AppError::Custom("custom".to_string()).kind(),
            ErrorKind::Other
        );
    }

    #[test]
    fn test_is_retryable() {
        // Retryable errors
        assert!(AppError::network_timeout("url").is_retryable());
        assert!(AppError::network_connection("url", "message").is_retryable());
        assert!(AppError::api_server_error(500, "message", "url").is_retryable());
        assert!(AppError::api_rate_limit("message", "url").is_retryable());
        assert!(AppError::api_service_unavailable(503, "message", "url").is_retryable());

        // Non-retryable errors
        assert!(!AppError::api_not_found("url").is_retryable());
        assert!(!AppError::api_client_error(400, "message", "url").is_retryable());
        assert!(!AppError::config_error("message").is_retryable());
        assert!(!AppError::api_malformed_json("message", "url").is_retryable());
        assert!(!AppError::tournament_not_found("abc").is_retryable());
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_error: AppError = json_error.into();
        assert!(matches!(app_error, AppError::ApiParse(_)));
        assert_eq!(app_error.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert_eq!(app_error.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<serde_json::Value>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_display_formats() {
        let errors = vec![
            AppError::config_error("test config error"),
            AppError::log_setup_error("test log error"),
            AppError::api_not_found("https://example.com"),
            AppError::api_server_error(500, "server error", "https://example.com"),
            AppError::api_client_error(400, "client error", "https://example.com"),
            AppError::api_rate_limit("rate limit", "https://example.com"),
            AppError::api_service_unavailable(503, "unavailable", "https://example.com"),
            AppError::network_timeout("https://example.com"),
            AppError::network_connection("https://example.com", "connection failed"),
            AppError::api_malformed_json("bad json", "https://example.com"),
            AppError::api_unexpected_structure("bad structure", "https://example.com"),
            AppError::api_no_data("no data", "https://example.com"),
            AppError::tournament_not_found("doc-id"),
            AppError::calendar_event_not_found(7),
            AppError::news_post_not_found("doc-id"),
            AppError::Custom("custom message".to_string()),
        ];

        for error in errors {
            let display_string = error.to_string();
            assert!(
                !display_string.is_empty(),
                "Error display should not be empty: {error:?}"
            );
            assert!(
                display_string.len() > 5,
                "Error display should be descriptive: {error:?}"
            );
        }
    }
}
