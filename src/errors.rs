use crate::models::ParamType;
use thiserror::Error;

/// Everything that can go wrong while talking to Jenkins or reading the decoded models.
#[derive(Error, Debug)]
pub enum JenkinsApiError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed for {url} (status code: 401)")]
    Unauthorized { url: String },

    #[error("Unable to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Param '{0}' wasn't found")]
    ParamNotFound(String),

    #[error("The value of '{name}' isn't of {expected} type")]
    TypeMismatch { name: String, expected: ParamType },

    #[error("User wasn't found for this build, maybe an upstream job triggered this build")]
    UserNotFound,

    #[error("Upstream job wasn't found for this build, maybe a user triggered this build")]
    UpstreamJobNotFound,

    #[error("No test results for this build")]
    TestResultsNotFound,
}

/// Coarse classification of a [`JenkinsApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be built or sent.
    Transport,
    /// The server answered with 401.
    Auth,
    /// The body is not the JSON we expected.
    Decode,
    /// A parameter, user, upstream job or test result is absent.
    NotFound,
    /// A parameter exists but holds another type.
    TypeMismatch,
}

impl JenkinsApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JenkinsApiError::InvalidUrl { .. } | JenkinsApiError::Http(_) => ErrorKind::Transport,
            JenkinsApiError::Unauthorized { .. } => ErrorKind::Auth,
            JenkinsApiError::Decode(_) => ErrorKind::Decode,
            JenkinsApiError::ParamNotFound(_)
            | JenkinsApiError::UserNotFound
            | JenkinsApiError::UpstreamJobNotFound
            | JenkinsApiError::TestResultsNotFound => ErrorKind::NotFound,
            JenkinsApiError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }
}

pub type Result<T> = std::result::Result<T, JenkinsApiError>;
