//! Error types for paginator registration, rendering and platform calls.

use thiserror::Error;
use twilight_http::{error::ErrorType, response::DeserializeBodyError};
use twilight_validate::embed::EmbedValidationError;

/// Failure while splitting a body into pages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("separator must not be empty")]
    EmptySeparator,

    /// A single separator-delimited token can never fit into one page.
    #[error("token of {len} characters exceeds the page limit of {max}")]
    OversizedToken { len: usize, max: usize },
}

/// Failure reported by a [`Surface`](super::Surface) implementation.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("message or reaction no longer exists")]
    NotFound,

    #[error("missing access to the message")]
    Forbidden,

    #[error("discord request failed")]
    Http(#[source] twilight_http::Error),

    #[error("failed to deserialize discord response")]
    Deserialize(#[from] DeserializeBodyError),
}

impl SurfaceError {
    /// Whether the target is gone or unreachable, which cleanup treats as done.
    pub fn is_gone(&self) -> bool {
        matches!(self, Self::NotFound | Self::Forbidden)
    }
}

impl From<twilight_http::Error> for SurfaceError {
    fn from(source: twilight_http::Error) -> Self {
        if let ErrorType::Response { status, .. } = source.kind() {
            match status.get() {
                404 => return Self::NotFound,
                403 => return Self::Forbidden,
                _ => {}
            }
        }

        Self::Http(source)
    }
}

/// Errors surfaced by the paginator API.
#[derive(Debug, Error)]
pub enum PaginatorError {
    /// Registration would create a category without a title and without content.
    #[error("category needs a title or non-empty content")]
    EmptyCategory,

    #[error("paginator has no categories to display")]
    NoCategories,

    #[error("pagination session already stopped")]
    SessionStopped,

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error("invalid page embed")]
    Embed(#[from] EmbedValidationError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
