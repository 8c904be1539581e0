//! Session launch helpers used by command handlers.

use tokio::sync::mpsc;
use tracing::{error, warn};
use twilight_model::id::{
    Id,
    marker::{MessageMarker, UserMarker},
};

use super::config::PaginatorConfig;
use super::error::PaginatorError;
use super::navigator::Navigator;
use super::router::SessionRouter;
use super::session::PaginatorSession;
use super::surface::Surface;

/// Queued inputs per session before the router starts dropping reactions.
pub const SESSION_QUEUE_CAPACITY: usize = 16;

/// Open a paginated message and drive it from a background task.
///
/// The message is shown and its reactions installed before this returns, so
/// display failures reach the caller. The spawned task stops the session on
/// timeout or stop and removes its route afterwards.
pub async fn send_paginated_message<S>(
    router: &SessionRouter,
    surface: S,
    navigator: Navigator,
    config: PaginatorConfig,
    author_id: Id<UserMarker>,
) -> Result<Id<MessageMarker>, PaginatorError>
where
    S: Surface + 'static,
{
    let (sender, receiver) = mpsc::channel(SESSION_QUEUE_CAPACITY);
    let mut session = PaginatorSession::new(surface, navigator, config, author_id, receiver);

    let message_id = session.open().await?;
    router.register(message_id, sender).await;

    let router = router.clone();
    tokio::spawn(async move {
        if let Err(source) = session.start().await {
            error!(
                ?source,
                message_id = message_id.get(),
                "pagination session failed"
            );
            if let Err(source) = session.stop().await {
                warn!(
                    ?source,
                    message_id = message_id.get(),
                    "failed to clean up pagination session"
                );
            }
        }

        router.unregister(message_id).await;
    });

    Ok(message_id)
}
