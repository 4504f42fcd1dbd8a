use thiserror::Error;

/// Unified error type for all Star Wars API operations.
///
/// The UI does not distinguish between variants; it renders the
/// [`Display`](std::fmt::Display) text. The split exists for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timed out: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success status code.
    #[error("Request failed with status code {status}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Failed to parse the API response body.
    #[error("Failed to parse response: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {detail}")]
    ClientBuild {
        /// Error details.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if (400..500).contains(status))
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
