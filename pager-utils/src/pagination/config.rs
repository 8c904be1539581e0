//! Paginator configuration: action legend, timeouts and page layout.

use std::time::Duration;

use twilight_model::{
    channel::message::embed::Embed,
    id::{Id, marker::MessageMarker},
};

/// Default idle timeout before a session stops itself.
pub const DEFAULT_COOLDOWN_SECS: u64 = 60;
/// Default maximum characters per text page (embed description budget).
pub const DEFAULT_MAX_SIZE: usize = 2000;
/// Default maximum embed fields per page.
pub const DEFAULT_MAX_FIELDS: usize = 25;
/// Default separator used to tokenize text bodies.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Standard reactions in slot order: first, previous, stop, next, last.
pub const STANDARD_EMOJIS: [&str; 5] = ["⏪", "◀\u{fe0f}", "⏹\u{fe0f}", "▶\u{fe0f}", "⏩"];

/// One of the five navigation commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    First,
    Previous,
    Stop,
    Next,
    Last,
}

impl Action {
    /// All actions in legend order.
    pub const ALL: [Action; 5] = [
        Action::First,
        Action::Previous,
        Action::Stop,
        Action::Next,
        Action::Last,
    ];

    pub fn slot(self) -> usize {
        match self {
            Action::First => 0,
            Action::Previous => 1,
            Action::Stop => 2,
            Action::Next => 3,
            Action::Last => 4,
        }
    }
}

/// Five reaction symbols bound to the action slots.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActionEmojis([String; 5]);

impl ActionEmojis {
    pub fn new(emojis: [String; 5]) -> Self {
        Self(emojis)
    }

    /// Symbol installed for `action`.
    pub fn get(&self, action: Action) -> &str {
        &self.0[action.slot()]
    }

    /// Symbols in legend order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Map a reacted emoji back to its action.
    ///
    /// Variation selectors are ignored, Discord reports `▶️` for a `▶` reaction.
    pub fn action_for(&self, emoji: &str) -> Option<Action> {
        let wanted = strip_variation_selector(emoji);
        Action::ALL
            .into_iter()
            .find(|action| strip_variation_selector(self.get(*action)) == wanted)
    }
}

impl Default for ActionEmojis {
    fn default() -> Self {
        Self(STANDARD_EMOJIS.map(ToOwned::to_owned))
    }
}

fn strip_variation_selector(emoji: &str) -> String {
    emoji.chars().filter(|c| *c != '\u{fe0f}').collect()
}

/// How bodies are cut into pages.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplitLayout {
    /// Maximum characters per text page.
    pub max_size: usize,
    /// Token separator for text bodies.
    pub separator: String,
    /// Maximum fields per field page.
    pub max_fields: usize,
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            separator: DEFAULT_SEPARATOR.to_owned(),
            max_fields: DEFAULT_MAX_FIELDS,
        }
    }
}

/// Per-session options.
#[derive(Clone, Debug)]
pub struct PaginatorConfig {
    pub emojis: ActionEmojis,
    /// Delete the bound message on stop instead of clearing its reactions.
    pub delete_on_stop: bool,
    /// Idle window after which the session stops itself.
    pub cooldown: Duration,
    /// Shown on open instead of the first page.
    pub initial_embed: Option<Embed>,
    /// Existing message to adopt instead of sending a new one.
    pub message: Option<Id<MessageMarker>>,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            emojis: ActionEmojis::default(),
            delete_on_stop: false,
            cooldown: Duration::from_secs(DEFAULT_COOLDOWN_SECS),
            initial_embed: None,
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_standard_emojis_to_actions() {
        let emojis = ActionEmojis::default();
        assert_eq!(emojis.action_for("⏪"), Some(Action::First));
        assert_eq!(emojis.action_for("◀️"), Some(Action::Previous));
        assert_eq!(emojis.action_for("◀"), Some(Action::Previous));
        assert_eq!(emojis.action_for("⏹"), Some(Action::Stop));
        assert_eq!(emojis.action_for("▶"), Some(Action::Next));
        assert_eq!(emojis.action_for("⏩"), Some(Action::Last));
        assert_eq!(emojis.action_for("👍"), None);
    }

    #[test]
    fn custom_legend_keeps_slot_order() {
        let emojis = ActionEmojis::new(["1", "2", "3", "4", "5"].map(ToOwned::to_owned));
        assert_eq!(emojis.iter().collect::<Vec<_>>(), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(emojis.get(Action::Next), "4");
        assert_eq!(emojis.action_for("5"), Some(Action::Last));
        assert_eq!(emojis.action_for("⏪"), None);
    }
}
