//! Products service errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a products API call failed.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// No response reached the client.
    #[error("no response from the products service")]
    Transport(#[source] reqwest::Error),

    /// The server answered 404.
    #[error("product not found")]
    NotFound,

    /// The server rejected the request.
    #[error("products service responded with status {0}")]
    Status(StatusCode),

    /// The server answered but the body could not be read.
    #[error("invalid response from the products service")]
    Decode(#[source] reqwest::Error),
}

impl ProductsServiceError {
    /// Status code of the response, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(_) => None,
            Self::NotFound => Some(StatusCode::NOT_FOUND),
            Self::Status(status) => Some(*status),
            Self::Decode(error) => error.status(),
        }
    }

    /// Whether the request never got a response (unreachable server, CORS).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Short parenthesised explanation shown next to user-facing messages.
    #[must_use]
    pub fn detail(&self) -> String {
        match (self, self.status()) {
            (Self::Transport(_), _) => "(Connection/CORS error)".to_string(),
            (_, Some(status)) => format!("(Status: {})", status.as_u16()),
            (_, None) => "(Invalid response)".to_string(),
        }
    }
}

impl From<reqwest::Error> for ProductsServiceError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return Self::Decode(error);
        }

        match error.status() {
            Some(StatusCode::NOT_FOUND) => Self::NotFound,
            Some(status) => Self::Status(status),
            None => Self::Transport(error),
        }
    }
}
