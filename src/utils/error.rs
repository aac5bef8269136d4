use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP error! status: {status}")]
    FetchFailure { status: u16 },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read data file {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid site data: {0}")]
    ParseFailure(#[from] serde_json::Error),

    #[error("Element #{id} not found in host page")]
    MissingContainer { id: String },

    #[error("Unknown page: {name}")]
    UnknownPage { name: String },

    #[error("Host page rewrite failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Host,
    Routing,
    Io,
    Config,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::FetchFailure { .. }
            | SiteError::Transport(_)
            | SiteError::ReadFailure { .. }
            | SiteError::ParseFailure(_) => ErrorCategory::Load,
            SiteError::MissingContainer { .. } | SiteError::Rewrite(_) => ErrorCategory::Host,
            SiteError::UnknownPage { .. } => ErrorCategory::Routing,
            SiteError::Io(_) => ErrorCategory::Io,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    /// 給 CLI 使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Load => format!("Could not load site data: {}", self),
            ErrorCategory::Host => format!("Host page problem: {}", self),
            ErrorCategory::Routing => format!("Nothing to render: {}", self),
            ErrorCategory::Io => format!("File system error: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
