use std::sync::Arc;

use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use pager_core::Context;
use pager_utils::pagination::{
    Categories, ChannelSurface, Navigator, PaginatorError, SplitError, SplitLayout,
    send_paginated_message,
};

pub const META: CommandMeta = CommandMeta {
    name: "paginate",
    desc: "Split your text into word-wrapped pages.",
    category: "paging",
    usage: "!paginate <text>",
};

const WORDS_PAGE_SIZE: usize = 200;

/// Paginate free text supplied by the author, breaking only between words.
///
/// Error behavior:
/// - missing text returns this command's usage.
/// - a single word longer than a page is reported back.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, text: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;

    let Some(text) = text else {
        let usage = format!("Usage: `{}`", META.usage);
        http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    };

    let navigator = match build_text_navigator(text, &msg.author.name) {
        Ok(navigator) => navigator,
        Err(PaginatorError::Split(SplitError::OversizedToken { len, max })) => {
            let out = format!("A word of {len} characters cannot fit on a {max}-character page.");
            http.create_message(msg.channel_id).content(&out).await?;
            return Ok(());
        }
        Err(source) => return Err(source.into()),
    };

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

fn build_text_navigator(text: &str, author_name: &str) -> Result<Navigator, PaginatorError> {
    let layout = SplitLayout {
        max_size: WORDS_PAGE_SIZE,
        separator: " ".to_owned(),
        ..SplitLayout::default()
    };
    let mut navigator = Navigator::new(Categories::new(layout));
    let footer = format!("Requested by {author_name}");

    navigator
        .categories_mut()
        .add_category(text, Some("Paginated text"), Some(&footer))?;

    Ok(navigator)
}
