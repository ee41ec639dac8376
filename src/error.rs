// Client error types
use thiserror::Error;

/// A failed call through the API facade: non-2xx response, transport failure,
/// or an unreadable response body.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestError {
    // 400 Bad Request
    #[error("{message}")]
    BadRequest { code: Option<i64>, message: String },

    // 401 Unauthorized
    #[error("{message}")]
    Unauthorized { code: Option<i64>, message: String },

    // 403 Forbidden
    #[error("{message}")]
    Forbidden { code: Option<i64>, message: String },

    // 404 Not Found
    #[error("{message}")]
    NotFound { code: Option<i64>, message: String },

    // Any other non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, code: Option<i64>, message: String },

    // 2xx with a non-zero business code in the envelope
    #[error("{message} (code {code})")]
    Business { code: i64, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// Build the error for an HTTP status and the server-supplied envelope fields
    pub fn from_status(status: u16, code: Option<i64>, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => RequestError::BadRequest { code, message },
            401 => RequestError::Unauthorized { code, message },
            403 => RequestError::Forbidden { code, message },
            404 => RequestError::NotFound { code, message },
            _ => RequestError::Status { status, code, message },
        }
    }

    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::BadRequest { .. } => Some(400),
            RequestError::Unauthorized { .. } => Some(401),
            RequestError::Forbidden { .. } => Some(403),
            RequestError::NotFound { .. } => Some(404),
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Business { .. } => Some(200),
            RequestError::Transport(_) | RequestError::Decode(_) => None,
        }
    }

    /// Server message (or the local failure description)
    pub fn message(&self) -> &str {
        match self {
            RequestError::BadRequest { message, .. } => message,
            RequestError::Unauthorized { message, .. } => message,
            RequestError::Forbidden { message, .. } => message,
            RequestError::NotFound { message, .. } => message,
            RequestError::Status { message, .. } => message,
            RequestError::Business { message, .. } => message,
            RequestError::Transport(msg) => msg,
            RequestError::Decode(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::BadRequest { .. } => "BAD_REQUEST",
            RequestError::Unauthorized { .. } => "UNAUTHORIZED",
            RequestError::Forbidden { .. } => "FORBIDDEN",
            RequestError::NotFound { .. } => "NOT_FOUND",
            RequestError::Status { .. } => "HTTP_ERROR",
            RequestError::Business { .. } => "BUSINESS_ERROR",
            RequestError::Transport(_) => "TRANSPORT_ERROR",
            RequestError::Decode(_) => "DECODE_ERROR",
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RequestError::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RequestError::Decode(err.to_string())
        } else {
            RequestError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Decode(err.to_string())
    }
}

/// The route builder could not produce a route table
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteSourceError {
    #[error("Failed to fetch menu records: {0}")]
    Fetch(#[from] RequestError),

    #[error("Duplicate menu record id {0}")]
    DuplicateId(u64),
}

/// Session-level failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("No authenticated session")]
    Unauthenticated,

    #[error("Login response did not contain an access token")]
    MissingToken,

    #[error("Token store error: {0}")]
    TokenStore(String),
}

/// Top-level error for everything the client exposes
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    RouteSource(#[from] RouteSourceError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl Error {
    /// True when the backend rejected our credential
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Error::Request(e) => e.is_unauthorized(),
            Error::RouteSource(RouteSourceError::Fetch(e)) => e.is_unauthorized(),
            Error::Session(SessionError::Unauthenticated) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
