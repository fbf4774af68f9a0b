/// Request-level failure reasons for [`ContentError::FetchFailed`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    #[error("content source answered with HTTP status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("response body is not valid JSON: {0}")]
    MalformedJson(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to fetch collection '{collection}': {reason}")]
    FetchFailed {
        collection: String,
        #[source]
        reason: FetchFailure,
    },
    #[error("no content available")]
    EmptyContent,
    #[error("unknown view: {0}")]
    UnknownView(String),
    #[error("normalized record does not match view model at {0}")]
    ViewShape(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid value: {0}")]
    InvalidValue(#[from] studio_types::TypeError),
    #[error("failed to read site config file: {0}")]
    ConfigRead(std::io::Error),
    #[error("failed to read raw content file: {0}")]
    RawRead(std::io::Error),
    #[error("raw content file is not valid JSON: {0}")]
    RawParse(serde_json::Error),
}

impl ContentError {
    /// Whether the view should offer a manual retry for this error.
    ///
    /// Only request-level fetch failures are retryable. Empty content is a neutral state and
    /// the remaining variants are configuration or programming errors.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ContentError::FetchFailed { .. })
    }
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;
