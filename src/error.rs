use std::fmt;

/// Error type for gist operations
#[derive(Debug)]
pub enum GistError {
    /// Settings could not be loaded
    Config(String),
    /// HTTP client could not be constructed
    Client(String),
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an unexpected response
    Api { status: u16, message: String },
    /// Credentials missing or rejected by the server
    Auth(String),
    /// Authenticated user does not own the gist
    Forbidden(String),
    /// Gist does not exist or is not visible
    NotFound(String),
    /// JSON parsing error
    Json(String),
    /// Interactive selection found no gists
    NoGists,
    /// User dismissed the selection prompt
    PromptCancelled,
    /// Selection prompt failed
    Resolution(String),
    /// No gist ID given and no terminal to prompt on
    NonInteractive,
}

impl fmt::Display for GistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GistError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GistError::Client(msg) => write!(f, "Failed to create HTTP client: {}", msg),
            GistError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GistError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GistError::Auth(msg) => write!(f, "{}", msg),
            GistError::Forbidden(msg) => write!(f, "{}", msg),
            GistError::NotFound(msg) => write!(f, "{}", msg),
            GistError::Json(msg) => write!(f, "JSON error: {}", msg),
            GistError::NoGists => write!(f, "no gists to select from"),
            GistError::PromptCancelled => write!(f, "gist selection cancelled"),
            GistError::Resolution(msg) => write!(f, "failed to select a gist: {}", msg),
            GistError::NonInteractive => write!(
                f,
                "a gist ID is required when not running interactively\n\nUsage: gistctl delete <ID>"
            ),
        }
    }
}

impl std::error::Error for GistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GistError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GistError {
    fn from(err: reqwest::Error) -> Self {
        GistError::Http(err)
    }
}

impl From<serde_json::Error> for GistError {
    fn from(err: serde_json::Error) -> Self {
        GistError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for GistError {
    fn from(err: serde_yml::Error) -> Self {
        GistError::Config(err.to_string())
    }
}

impl From<std::io::Error> for GistError {
    fn from(err: std::io::Error) -> Self {
        GistError::Config(err.to_string())
    }
}

/// Result type alias for gist operations
pub type Result<T> = std::result::Result<T, GistError>;
