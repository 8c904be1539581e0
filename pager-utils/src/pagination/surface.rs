//! Display surface abstraction over the chat platform.

use std::sync::Arc;

use async_trait::async_trait;
use twilight_http::{Client, request::channel::reaction::RequestReactionType};
use twilight_model::{
    channel::message::embed::Embed,
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker, UserMarker},
    },
};

use super::error::SurfaceError;

/// Message operations a pagination session needs from the platform.
#[async_trait]
pub trait Surface: Send + Sync {
    /// Post a new message and return its id.
    async fn send(&self, embed: &Embed) -> Result<Id<MessageMarker>, SurfaceError>;

    async fn edit(&self, message_id: Id<MessageMarker>, embed: &Embed) -> Result<(), SurfaceError>;

    async fn delete(&self, message_id: Id<MessageMarker>) -> Result<(), SurfaceError>;

    /// Remove every reaction from the message.
    async fn clear_reactions(&self, message_id: Id<MessageMarker>) -> Result<(), SurfaceError>;

    async fn add_reaction(
        &self,
        message_id: Id<MessageMarker>,
        emoji: &str,
    ) -> Result<(), SurfaceError>;

    /// Remove one user's reaction so the button can be pressed again.
    async fn remove_reaction(
        &self,
        message_id: Id<MessageMarker>,
        emoji: &str,
        user_id: Id<UserMarker>,
    ) -> Result<(), SurfaceError>;
}

/// [`Surface`] backed by the Discord HTTP client for a single channel.
#[derive(Clone)]
pub struct ChannelSurface {
    http: Arc<Client>,
    channel_id: Id<ChannelMarker>,
}

impl ChannelSurface {
    pub fn new(http: Arc<Client>, channel_id: Id<ChannelMarker>) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl Surface for ChannelSurface {
    async fn send(&self, embed: &Embed) -> Result<Id<MessageMarker>, SurfaceError> {
        let message = self
            .http
            .create_message(self.channel_id)
            .embeds(std::slice::from_ref(embed))
            .await?
            .model()
            .await?;

        Ok(message.id)
    }

    async fn edit(&self, message_id: Id<MessageMarker>, embed: &Embed) -> Result<(), SurfaceError> {
        self.http
            .update_message(self.channel_id, message_id)
            .embeds(Some(std::slice::from_ref(embed)))
            .await?;

        Ok(())
    }

    async fn delete(&self, message_id: Id<MessageMarker>) -> Result<(), SurfaceError> {
        self.http
            .delete_message(self.channel_id, message_id)
            .await?;

        Ok(())
    }

    async fn clear_reactions(&self, message_id: Id<MessageMarker>) -> Result<(), SurfaceError> {
        self.http
            .delete_all_reactions(self.channel_id, message_id)
            .await?;

        Ok(())
    }

    async fn add_reaction(
        &self,
        message_id: Id<MessageMarker>,
        emoji: &str,
    ) -> Result<(), SurfaceError> {
        let reaction = RequestReactionType::Unicode { name: emoji };
        self.http
            .create_reaction(self.channel_id, message_id, &reaction)
            .await?;

        Ok(())
    }

    async fn remove_reaction(
        &self,
        message_id: Id<MessageMarker>,
        emoji: &str,
        user_id: Id<UserMarker>,
    ) -> Result<(), SurfaceError> {
        let reaction = RequestReactionType::Unicode { name: emoji };
        self.http
            .delete_reaction(self.channel_id, message_id, &reaction, user_id)
            .await?;

        Ok(())
    }
}
