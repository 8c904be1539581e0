/// Embed builders shared across commands.
pub mod embed;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Reaction paginator: splitters, navigator, sessions and routing.
pub mod pagination;
