//! Category registry: ordered groups of pre-split pages.

use twilight_model::channel::message::embed::{Embed, EmbedField};

use super::config::SplitLayout;
use super::error::PaginatorError;
use super::split::{split_fields, split_text};

/// Synthetic insertion ordinal identifying a category.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CategoryId(u64);

/// One unit of renderable content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    /// Explicit empty body; the embed shows only title and footer.
    Empty,
    Text(String),
    Fields(Vec<EmbedField>),
}

impl Page {
    fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            Page::Empty
        } else {
            Page::Text(text)
        }
    }

    /// Character count of the page body.
    pub fn text_len(&self) -> usize {
        match self {
            Page::Empty => 0,
            Page::Text(text) => text.chars().count(),
            Page::Fields(fields) => fields
                .iter()
                .map(|field| field.name.chars().count() + field.value.chars().count())
                .sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Page::Empty)
    }
}

/// A titled group of pages sharing one footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub title: Option<String>,
    pub footer: Option<String>,
    pub pages: Vec<Page>,
}

/// Ordered category registry.
#[derive(Clone, Debug, Default)]
pub struct Categories {
    layout: SplitLayout,
    entries: Vec<Category>,
    next_id: u64,
}

impl Categories {
    pub fn new(layout: SplitLayout) -> Self {
        Self {
            layout,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn layout(&self) -> &SplitLayout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter()
    }

    /// Number of pages in the category at `index`, zero when out of range.
    pub fn page_count(&self, index: usize) -> usize {
        self.entries.get(index).map_or(0, |category| category.pages.len())
    }

    /// Total body characters across every page.
    pub fn text_len(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|category| category.pages.iter())
            .map(Page::text_len)
            .sum()
    }

    /// Register a text category, splitting `content` into pages.
    pub fn add_category(
        &mut self,
        content: &str,
        title: Option<&str>,
        footer: Option<&str>,
    ) -> Result<CategoryId, PaginatorError> {
        let pages = self.text_pages(content)?;
        self.insert(title, footer, pages)
    }

    /// Register a field category, grouping `fields` into pages.
    pub fn add_field_category(
        &mut self,
        fields: Vec<EmbedField>,
        title: Option<&str>,
        footer: Option<&str>,
    ) -> Result<CategoryId, PaginatorError> {
        let pages = self.field_pages(&fields);
        self.insert(title, footer, pages)
    }

    /// Register a category taken from a pre-built embed.
    ///
    /// A non-blank description is split as text, otherwise the embed fields are grouped.
    pub fn add_embed(&mut self, embed: &Embed) -> Result<CategoryId, PaginatorError> {
        let footer = embed.footer.as_ref().map(|footer| footer.text.as_str());
        let pages = match embed.description.as_deref() {
            Some(description) if !description.trim().is_empty() => self.text_pages(description)?,
            _ => self.field_pages(&embed.fields),
        };

        self.insert(embed.title.as_deref(), footer, pages)
    }

    /// Register pre-chunked text categories keyed by `(title, footer)`.
    ///
    /// Nothing is registered when any entry fails validation.
    pub fn add_from_map<'a, I>(&mut self, entries: I) -> Result<Vec<CategoryId>, PaginatorError>
    where
        I: IntoIterator<Item = ((Option<&'a str>, Option<&'a str>), Vec<String>)>,
    {
        let prepared = entries
            .into_iter()
            .map(|((title, footer), texts)| {
                let pages = texts.into_iter().map(Page::from_text).collect();
                prepare(title, footer, pages)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(prepared
            .into_iter()
            .map(|(title, footer, pages)| self.push(title, footer, pages))
            .collect())
    }

    /// Register field categories keyed by `(title, footer)`, grouping each field list.
    ///
    /// Nothing is registered when any entry fails validation.
    pub fn add_fields_from_map<'a, I>(
        &mut self,
        entries: I,
    ) -> Result<Vec<CategoryId>, PaginatorError>
    where
        I: IntoIterator<Item = ((Option<&'a str>, Option<&'a str>), Vec<EmbedField>)>,
    {
        let prepared = entries
            .into_iter()
            .map(|((title, footer), fields)| prepare(title, footer, self.field_pages(&fields)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(prepared
            .into_iter()
            .map(|(title, footer, pages)| self.push(title, footer, pages))
            .collect())
    }

    fn text_pages(&self, content: &str) -> Result<Vec<Page>, PaginatorError> {
        let chunks = split_text(content, &self.layout.separator, self.layout.max_size)?;
        Ok(chunks.into_iter().map(Page::from_text).collect())
    }

    fn field_pages(&self, fields: &[EmbedField]) -> Vec<Page> {
        split_fields(fields, self.layout.max_fields)
            .into_iter()
            .map(Page::Fields)
            .collect()
    }

    fn insert(
        &mut self,
        title: Option<&str>,
        footer: Option<&str>,
        pages: Vec<Page>,
    ) -> Result<CategoryId, PaginatorError> {
        let (title, footer, pages) = prepare(title, footer, pages)?;
        Ok(self.push(title, footer, pages))
    }

    fn push(
        &mut self,
        title: Option<String>,
        footer: Option<String>,
        pages: Vec<Page>,
    ) -> CategoryId {
        let id = CategoryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Category {
            id,
            title,
            footer,
            pages,
        });
        id
    }
}

type Prepared = (Option<String>, Option<String>, Vec<Page>);

fn prepare(
    title: Option<&str>,
    footer: Option<&str>,
    mut pages: Vec<Page>,
) -> Result<Prepared, PaginatorError> {
    let title = non_blank(title);
    let footer = non_blank(footer);

    if title.is_none() && pages.iter().all(Page::is_empty) {
        return Err(PaginatorError::EmptyCategory);
    }

    if pages.is_empty() {
        pages.push(Page::Empty);
    }

    Ok((title, footer, pages))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}
