use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};
use twilight_validate::embed::EmbedValidationError;

use crate::pagination::Page;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// Build the embed for one paginator page with consistent styling.
pub fn build_page_embed(
    title: Option<&str>,
    page: &Page,
    footer: Option<&str>,
) -> Result<Embed, EmbedValidationError> {
    let mut builder = EmbedBuilder::new().color(DEFAULT_EMBED_COLOR);

    if let Some(title) = title {
        builder = builder.title(title);
    }

    match page {
        Page::Empty => {}
        Page::Text(text) => builder = builder.description(text.as_str()),
        Page::Fields(fields) => {
            for field in fields {
                builder = builder.field(field.clone());
            }
        }
    }

    if let Some(footer) = footer.filter(|text| !text.is_empty()) {
        builder = builder.footer(EmbedFooterBuilder::new(footer).build());
    }

    Ok(builder.validate()?.build())
}
