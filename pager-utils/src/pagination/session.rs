//! Reaction-driven pagination session bound to one message and one author.

use tokio::sync::mpsc;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, info, warn};
use twilight_model::id::{
    Id,
    marker::{MessageMarker, UserMarker},
};

use super::config::{Action, PaginatorConfig};
use super::error::{PaginatorError, SurfaceError};
use super::navigator::{Navigator, Transition};
use super::surface::Surface;

/// A reaction added somewhere the bot can see.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReactionEvent {
    pub message_id: Id<MessageMarker>,
    pub user_id: Id<UserMarker>,
    pub emoji: String,
}

/// Input delivered to a running session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionInput {
    Reaction(ReactionEvent),
    /// Stop the session as if the stop reaction had been pressed.
    Stop,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Idle,
    Active,
    Stopped,
}

enum Wait {
    Accepted(ReactionEvent, Action),
    TimedOut,
    StopRequested,
    Closed,
}

/// One pagination interaction.
///
/// Events are consumed strictly one at a time from the session's channel;
/// the session owns its bound message until it stops.
pub struct PaginatorSession<S> {
    surface: S,
    navigator: Navigator,
    config: PaginatorConfig,
    author_id: Id<UserMarker>,
    events: mpsc::Receiver<SessionInput>,
    message_id: Option<Id<MessageMarker>>,
    state: SessionState,
}

impl<S: Surface> PaginatorSession<S> {
    pub fn new(
        surface: S,
        navigator: Navigator,
        config: PaginatorConfig,
        author_id: Id<UserMarker>,
        events: mpsc::Receiver<SessionInput>,
    ) -> Self {
        Self {
            surface,
            navigator,
            config,
            author_id,
            events,
            message_id: None,
            state: SessionState::Idle,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Bound message, known once the session has been opened.
    pub fn message_id(&self) -> Option<Id<MessageMarker>> {
        self.message_id
    }

    /// Display the first view and install the reaction legend.
    ///
    /// Adopts the configured message when present, otherwise sends a new one.
    /// Calling it again while active returns the bound message.
    pub async fn open(&mut self) -> Result<Id<MessageMarker>, PaginatorError> {
        match (self.state, self.message_id) {
            (SessionState::Stopped, _) => return Err(PaginatorError::SessionStopped),
            (SessionState::Active, Some(message_id)) => return Ok(message_id),
            _ => {}
        }

        if self.navigator.categories().is_empty() {
            return Err(PaginatorError::NoCategories);
        }

        let embed = match &self.config.initial_embed {
            Some(embed) => embed.clone(),
            None => self.navigator.render()?,
        };

        let message_id = match self.config.message {
            Some(message_id) => {
                self.surface.edit(message_id, &embed).await?;
                message_id
            }
            None => self.surface.send(&embed).await?,
        };

        self.message_id = Some(message_id);
        self.state = SessionState::Active;

        let emojis = self.config.emojis.clone();
        for emoji in emojis.iter() {
            if let Err(source) = self.surface.add_reaction(message_id, emoji).await {
                // A partial legend is not navigable; retire the message.
                if let Err(cleanup) = self.stop().await {
                    warn!(
                        ?cleanup,
                        message_id = message_id.get(),
                        "failed to clean up after reaction install failure"
                    );
                }
                return Err(source.into());
            }
        }

        info!(
            message_id = message_id.get(),
            author_id = self.author_id.get(),
            categories = self.navigator.categories().len(),
            "pagination session opened"
        );

        Ok(message_id)
    }

    /// Run the session until it stops.
    ///
    /// Opens the session first if needed. Returns once the stop reaction
    /// fires, the idle timeout elapses, a stop is requested or the event
    /// channel closes.
    pub async fn start(&mut self) -> Result<(), PaginatorError> {
        match self.state {
            SessionState::Stopped => return Ok(()),
            SessionState::Idle => {
                self.open().await?;
            }
            SessionState::Active => {}
        }

        while self.state == SessionState::Active {
            match self.next_input().await {
                Wait::Accepted(event, action) => self.handle(event, action).await?,
                Wait::TimedOut => {
                    debug!(
                        message_id = self.message_id.map(Id::get),
                        "pagination session idle timeout"
                    );
                    self.stop().await?;
                }
                Wait::StopRequested | Wait::Closed => self.stop().await?,
            }
        }

        Ok(())
    }

    /// Deactivate the session and retire the bound message.
    ///
    /// Deletes the message or clears its reactions depending on the config.
    /// A message that is already gone counts as cleaned up. Only the first
    /// call touches the platform.
    pub async fn stop(&mut self) -> Result<(), PaginatorError> {
        if self.state == SessionState::Stopped {
            return Ok(());
        }

        self.state = SessionState::Stopped;
        self.events.close();

        let Some(message_id) = self.message_id else {
            return Ok(());
        };

        let result = if self.config.delete_on_stop {
            self.surface.delete(message_id).await
        } else {
            self.surface.clear_reactions(message_id).await
        };

        info!(message_id = message_id.get(), "pagination session stopped");

        match result {
            Err(source) if source.is_gone() => {
                debug!(?source, message_id = message_id.get(), "message already gone on stop");
                Ok(())
            }
            other => other.map_err(PaginatorError::from),
        }
    }

    async fn next_input(&mut self) -> Wait {
        let deadline = Instant::now() + self.config.cooldown;

        loop {
            let input = match timeout_at(deadline, self.events.recv()).await {
                Err(_elapsed) => return Wait::TimedOut,
                Ok(None) => return Wait::Closed,
                Ok(Some(input)) => input,
            };

            let event = match input {
                SessionInput::Stop => return Wait::StopRequested,
                SessionInput::Reaction(event) => event,
            };

            match self.accepts(&event) {
                Some(action) => return Wait::Accepted(event, action),
                None => debug!(
                    message_id = event.message_id.get(),
                    user_id = event.user_id.get(),
                    emoji = %event.emoji,
                    "ignoring reaction"
                ),
            }
        }
    }

    fn accepts(&self, event: &ReactionEvent) -> Option<Action> {
        if Some(event.message_id) != self.message_id || event.user_id != self.author_id {
            return None;
        }

        self.config.emojis.action_for(&event.emoji)
    }

    async fn handle(&mut self, event: ReactionEvent, action: Action) -> Result<(), PaginatorError> {
        let transition = self.navigator.apply(action);
        debug!(?action, ?transition, cursor = ?self.navigator.cursor(), "pagination action");

        if transition == Transition::Stop {
            return self.stop().await;
        }

        self.remove_reaction(&event).await?;

        if transition == Transition::Moved {
            let embed = self.navigator.render()?;
            self.surface.edit(event.message_id, &embed).await?;
        }

        Ok(())
    }

    async fn remove_reaction(&self, event: &ReactionEvent) -> Result<(), SurfaceError> {
        match self
            .surface
            .remove_reaction(event.message_id, &event.emoji, event.user_id)
            .await
        {
            Err(source) if source.is_gone() => {
                debug!(?source, "could not remove user reaction");
                Ok(())
            }
            other => other,
        }
    }
}
