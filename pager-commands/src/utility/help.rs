use std::sync::Arc;

use twilight_model::{
    channel::message::embed::EmbedField, gateway::payload::incoming::MessageCreate,
};

use crate::{COMMANDS, CommandMeta};
use pager_core::Context;
use pager_utils::pagination::{
    Categories, ChannelSurface, Navigator, PaginatorError, SplitLayout, send_paginated_message,
};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help [category]",
};

const HELP_COMMANDS_PER_PAGE: usize = 10;

/// Render the command catalog as a paginator with one category per command group.
///
/// Inputs:
/// - optional category name: `!help [category]`.
///
/// Error behavior:
/// - unknown category lists the available ones.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;
    let wanted = arg1.map(str::to_ascii_lowercase);
    let categories = command_categories();

    if let Some(wanted_category) = wanted.as_deref()
        && !categories.contains(&wanted_category)
    {
        let out = unknown_category_message(wanted_category, &categories);
        http.create_message(msg.channel_id).content(&out).await?;
        return Ok(());
    }

    let navigator = build_help_navigator(wanted.as_deref())?;
    let surface = ChannelSurface::new(Arc::clone(&ctx.http), msg.channel_id);

    send_paginated_message(
        &ctx.sessions,
        surface,
        navigator,
        ctx.paginator_config(),
        msg.author.id,
    )
    .await?;

    Ok(())
}

/// Sorted, de-duplicated command group names.
fn command_categories() -> Vec<&'static str> {
    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

fn build_help_navigator(only: Option<&str>) -> Result<Navigator, PaginatorError> {
    let layout = SplitLayout {
        max_fields: HELP_COMMANDS_PER_PAGE,
        ..SplitLayout::default()
    };
    let mut navigator = Navigator::new(Categories::new(layout));

    for category in command_categories() {
        if only.is_some_and(|wanted| wanted != category) {
            continue;
        }

        let mut commands: Vec<&CommandMeta> = COMMANDS
            .iter()
            .filter(|command| command.category == category)
            .collect();
        commands.sort_unstable_by_key(|command| command.name);

        let fields = commands
            .iter()
            .map(|command| EmbedField {
                inline: false,
                name: format!("`{}`", command.usage),
                value: command.desc.to_owned(),
            })
            .collect();

        let title = format!("Help: {category}");
        let footer = match commands.len() {
            1 => "1 command".to_owned(),
            count => format!("{count} commands"),
        };
        navigator
            .categories_mut()
            .add_field_category(fields, Some(&title), Some(&footer))?;
    }

    Ok(navigator)
}

fn unknown_category_message(wanted: &str, categories: &[&str]) -> String {
    format!(
        "Unknown category `{}`. Available categories: {}.",
        wanted,
        categories.join(", ")
    )
}
