pub mod paging;
pub mod utility;

use tracing::debug;
use twilight_model::{
    channel::message::EmojiReactionType,
    gateway::payload::incoming::{MessageCreate, ReactionAdd},
};

use pager_core::Context;
use pager_utils::COMMAND_PREFIX;
use pager_utils::pagination::ReactionEvent;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    paging::pagetest::META,
    paging::paginate::META,
    // Add new commands here
];

/// A prefix command split into name, first argument and the raw remainder.
#[derive(Debug, PartialEq, Eq)]
struct ParsedCommand<'a> {
    name: String,
    arg1: Option<&'a str>,
    rest: Option<&'a str>,
}

fn parse_command(content: &str) -> Option<ParsedCommand<'_>> {
    let content = content.trim();
    let content = content.strip_prefix(COMMAND_PREFIX)?.trim();

    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let name = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let arg1 = rest.and_then(|value| {
        value
            .split(char::is_whitespace)
            .next()
            .filter(|arg| !arg.is_empty())
    });

    Some(ParsedCommand { name, arg1, rest })
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some(command) = parse_command(&content) else {
        return Ok(());
    };

    let arg1 = command.arg1;

    match command.name.as_str() {
        "help" => utility::help::run(ctx.clone(), msg, arg1).await?,
        "pagetest" => paging::pagetest::run(ctx.clone(), msg, arg1).await?,
        "paginate" => paging::paginate::run(ctx.clone(), msg, command.rest).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

/// Forward a gateway reaction to the pagination session bound to its message.
///
/// Custom emoji never match the paginator legend and are dropped here.
pub async fn handle_reaction(ctx: Context, reaction: Box<ReactionAdd>) -> anyhow::Result<()> {
    let EmojiReactionType::Unicode { name } = &reaction.emoji else {
        return Ok(());
    };

    let event = ReactionEvent {
        message_id: reaction.message_id,
        user_id: reaction.user_id,
        emoji: name.clone(),
    };

    let message_id = event.message_id;
    if !ctx.sessions.dispatch(event).await {
        debug!(message_id = message_id.get(), "reaction not routed to a session");
    }

    Ok(())
}
