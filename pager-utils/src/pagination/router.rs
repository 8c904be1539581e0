//! Routes gateway reactions to the live session bound to each message.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, mpsc};
use tracing::warn;
use twilight_model::id::{Id, marker::MessageMarker};

use super::session::{ReactionEvent, SessionInput};

type RouteMap = HashMap<Id<MessageMarker>, mpsc::Sender<SessionInput>>;

/// Shared message id to session channel map.
///
/// Cheap to clone; all clones share the same routes.
#[derive(Clone, Default)]
pub struct SessionRouter {
    routes: Arc<Mutex<RouteMap>>,
}

impl SessionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `message_id` to a session, replacing any previous route.
    pub async fn register(
        &self,
        message_id: Id<MessageMarker>,
        sender: mpsc::Sender<SessionInput>,
    ) {
        let mut routes = self.routes.lock().await;
        routes.insert(message_id, sender);
    }

    /// Drop the route for `message_id` once its session has closed its channel.
    ///
    /// A newer session that re-registered the same message keeps its route.
    pub async fn unregister(&self, message_id: Id<MessageMarker>) {
        let mut routes = self.routes.lock().await;
        if routes
            .get(&message_id)
            .is_some_and(mpsc::Sender::is_closed)
        {
            routes.remove(&message_id);
        }
    }

    /// Forward a reaction to the session bound to its message.
    ///
    /// Returns whether a live session received it. Never waits on a busy session.
    pub async fn dispatch(&self, event: ReactionEvent) -> bool {
        let message_id = event.message_id;
        self.send(message_id, SessionInput::Reaction(event)).await
    }

    /// Ask the session bound to `message_id` to stop.
    pub async fn stop(&self, message_id: Id<MessageMarker>) -> bool {
        self.send(message_id, SessionInput::Stop).await
    }

    /// Number of registered routes.
    pub async fn len(&self) -> usize {
        self.routes.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.routes.lock().await.is_empty()
    }

    async fn send(&self, message_id: Id<MessageMarker>, input: SessionInput) -> bool {
        let mut routes = self.routes.lock().await;
        let Some(sender) = routes.get(&message_id) else {
            return false;
        };

        match sender.try_send(input) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(
                    message_id = message_id.get(),
                    "pagination session queue full, dropping input"
                );
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                routes.remove(&message_id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use twilight_model::id::Id;

    use super::*;

    fn event(message_id: u64) -> ReactionEvent {
        ReactionEvent {
            message_id: Id::new(message_id),
            user_id: Id::new(1),
            emoji: "⏩".to_owned(),
        }
    }

    #[tokio::test]
    async fn dispatches_to_the_bound_session_only() {
        let router = SessionRouter::new();
        let (first_sender, mut first) = mpsc::channel(4);
        let (second_sender, mut second) = mpsc::channel(4);
        router.register(Id::new(10), first_sender).await;
        router.register(Id::new(20), second_sender).await;

        assert!(router.dispatch(event(10)).await);
        assert!(!router.dispatch(event(30)).await);

        assert_eq!(first.try_recv().ok(), Some(SessionInput::Reaction(event(10))));
        assert!(second.try_recv().is_err());
    }

    #[tokio::test]
    async fn closed_sessions_are_pruned_on_dispatch() {
        let router = SessionRouter::new();
        let (sender, receiver) = mpsc::channel(4);
        router.register(Id::new(10), sender).await;
        drop(receiver);

        assert!(!router.dispatch(event(10)).await);
        assert!(router.is_empty().await);
    }

    #[tokio::test]
    async fn unregister_keeps_live_routes() {
        let router = SessionRouter::new();
        let (sender, mut receiver) = mpsc::channel(4);
        router.register(Id::new(10), sender).await;

        router.unregister(Id::new(10)).await;
        assert_eq!(router.len().await, 1);

        receiver.close();
        router.unregister(Id::new(10)).await;
        assert!(router.is_empty().await);
    }

    #[tokio::test]
    async fn full_queue_drops_input() {
        let router = SessionRouter::new();
        let (sender, mut receiver) = mpsc::channel(1);
        router.register(Id::new(10), sender).await;

        assert!(router.dispatch(event(10)).await);
        assert!(!router.stop(Id::new(10)).await);
        assert_eq!(router.len().await, 1);
        assert!(matches!(receiver.try_recv(), Ok(SessionInput::Reaction(_))));
    }

    #[tokio::test]
    async fn stop_is_forwarded() {
        let router = SessionRouter::new();
        let (sender, mut receiver) = mpsc::channel(4);
        router.register(Id::new(10), sender).await;

        assert!(router.stop(Id::new(10)).await);
        assert_eq!(receiver.try_recv().ok(), Some(SessionInput::Stop));
    }
}
