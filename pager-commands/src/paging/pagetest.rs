use std::sync::Arc;

use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use pager_core::Context;
use pager_utils::pagination::{
    Categories, ChannelSurface, Navigator, PaginatorError, SplitLayout, send_paginated_message,
};

pub const META: CommandMeta = CommandMeta {
    name: "pagetest",
    desc: "Open a sample paginator to try the reaction controls.",
    category: "paging",
    usage: "!pagetest [lines]",
};

const DEFAULT_LINES: usize = 60;
const MAX_LINES: usize = 500;
const SAMPLE_PAGE_SIZE: usize = 300;
const SAMPLE_SECTIONS: [&str; 3] = ["Alpha", "Beta", "Gamma"];

/// Sample paginator command.
///
/// Purpose:
/// - verify embed rendering and reaction navigation.
///
/// Inputs:
/// - optional line count per section: `!pagetest [lines]`.
///
/// Error behavior:
/// - returns usage text on an invalid line count.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;

    let Some(lines) = parse_line_count(arg1) else {
        let usage = format!(
            "Usage: `{}` (lines between 1 and {})",
            META.usage, MAX_LINES
        );
        http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    };

    let navigator = build_sample_navigator(lines)?;
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

/// Parse the optional line count; missing means the default.
fn parse_line_count(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value
            .parse::<usize>()
            .ok()
            .filter(|lines| (1..=MAX_LINES).contains(lines)),
        None => Some(DEFAULT_LINES),
    }
}

fn build_sample_navigator(lines: usize) -> Result<Navigator, PaginatorError> {
    let layout = SplitLayout {
        max_size: SAMPLE_PAGE_SIZE,
        ..SplitLayout::default()
    };
    let mut navigator = Navigator::new(Categories::new(layout));

    for (index, section) in SAMPLE_SECTIONS.iter().enumerate() {
        let body = (1..=lines)
            .map(|line| format!("{section} sample line #{line}"))
            .collect::<Vec<_>>()
            .join("\n");
        let footer = format!("Section {} of {}", index + 1, SAMPLE_SECTIONS.len());

        navigator
            .categories_mut()
            .add_category(&body, Some(section), Some(&footer))?;
    }

    Ok(navigator)
}
