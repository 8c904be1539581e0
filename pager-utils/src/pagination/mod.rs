//! Reaction-driven multi-page embed paginator.
//!
//! Content is registered into [`Categories`] (split into pages up front),
//! walked by a [`Navigator`], and displayed by a [`PaginatorSession`] that
//! listens for reactions routed through a [`SessionRouter`].

mod category;
mod config;
mod error;
mod navigator;
pub mod respond;
mod router;
mod session;
pub mod split;
mod surface;

#[cfg(test)]
mod test_support;

pub use category::{Categories, Category, CategoryId, Page};
pub use config::{
    Action, ActionEmojis, DEFAULT_COOLDOWN_SECS, DEFAULT_MAX_FIELDS, DEFAULT_MAX_SIZE,
    DEFAULT_SEPARATOR, PaginatorConfig, STANDARD_EMOJIS, SplitLayout,
};
pub use error::{PaginatorError, SplitError, SurfaceError};
pub use navigator::{Cursor, Navigator, Transition};
pub use respond::{SESSION_QUEUE_CAPACITY, send_paginated_message};
pub use router::SessionRouter;
pub use session::{PaginatorSession, ReactionEvent, SessionInput, SessionState};
pub use split::{split_fields, split_text};
pub use surface::{ChannelSurface, Surface};
