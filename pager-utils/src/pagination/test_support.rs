//! Test utilities shared across the pagination modules.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use twilight_model::{
    channel::message::embed::Embed,
    id::{
        Id,
        marker::{MessageMarker, UserMarker},
    },
};

use super::error::SurfaceError;
use super::surface::Surface;

/// Id returned for every message the recording surface "sends".
pub const SENT_MESSAGE_ID: u64 = 42;

/// One recorded platform call. Embeds are reduced to their description.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SurfaceCall {
    Send(Option<String>),
    Edit(u64, Option<String>),
    Delete(u64),
    ClearReactions(u64),
    AddReaction(u64, String),
    RemoveReaction(u64, String, u64),
}

/// Error a recording surface call should return.
#[derive(Clone, Copy, Debug)]
pub enum InjectedFailure {
    NotFound,
    Forbidden,
}

impl InjectedFailure {
    fn error(self) -> SurfaceError {
        match self {
            InjectedFailure::NotFound => SurfaceError::NotFound,
            InjectedFailure::Forbidden => SurfaceError::Forbidden,
        }
    }
}

/// A [`Surface`] that records every call and never talks to Discord.
///
/// Failed calls are still recorded.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
    cleanup_failure: Option<InjectedFailure>,
    edit_failure: Option<InjectedFailure>,
    add_reaction_failure: Option<InjectedFailure>,
    remove_reaction_failure: Option<InjectedFailure>,
}

impl RecordingSurface {
    /// Fail `delete` and `clear_reactions`.
    pub fn failing_cleanup(failure: InjectedFailure) -> Self {
        Self {
            cleanup_failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn failing_edit(failure: InjectedFailure) -> Self {
        Self {
            edit_failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn failing_add_reaction(failure: InjectedFailure) -> Self {
        Self {
            add_reaction_failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn failing_remove_reaction(failure: InjectedFailure) -> Self {
        Self {
            remove_reaction_failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn edits(&self) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SurfaceCall::Edit(_, description) => Some(description),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn outcome(failure: Option<InjectedFailure>) -> Result<(), SurfaceError> {
    match failure {
        Some(failure) => Err(failure.error()),
        None => Ok(()),
    }
}

#[async_trait]
impl Surface for RecordingSurface {
    async fn send(&self, embed: &Embed) -> Result<Id<MessageMarker>, SurfaceError> {
        self.record(SurfaceCall::Send(embed.description.clone()));
        Ok(Id::new(SENT_MESSAGE_ID))
    }

    async fn edit(&self, message_id: Id<MessageMarker>, embed: &Embed) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Edit(message_id.get(), embed.description.clone()));
        outcome(self.edit_failure)
    }

    async fn delete(&self, message_id: Id<MessageMarker>) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Delete(message_id.get()));
        outcome(self.cleanup_failure)
    }

    async fn clear_reactions(&self, message_id: Id<MessageMarker>) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::ClearReactions(message_id.get()));
        outcome(self.cleanup_failure)
    }

    async fn add_reaction(
        &self,
        message_id: Id<MessageMarker>,
        emoji: &str,
    ) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::AddReaction(message_id.get(), emoji.to_owned()));
        outcome(self.add_reaction_failure)
    }

    async fn remove_reaction(
        &self,
        message_id: Id<MessageMarker>,
        emoji: &str,
        user_id: Id<UserMarker>,
    ) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::RemoveReaction(
            message_id.get(),
            emoji.to_owned(),
            user_id.get(),
        ));
        outcome(self.remove_reaction_failure)
    }
}
