use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Pagination limit reached while fetching {operation}: exceeded {max_pages} pages")]
    PaginationLimit { operation: String, max_pages: u32 },

    #[error("Token decryption error: {0}")]
    Decrypt(String),

    #[error("Environment error: {0}")]
    Env(String),
}

impl ConnectorError {
    /// HTTP status carried by this error, when there is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ConnectorError::Api { status, .. } => Some(*status),
            ConnectorError::NotFound(_) => Some(404),
            ConnectorError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for the benign membership case: the account simply has no
    /// organization membership to report.
    pub fn is_not_found(&self) -> bool {
        matches!(self.status_code(), Some(404))
    }
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
