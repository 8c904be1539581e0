//! Cursor state machine over registered categories.

use std::fmt;

use twilight_model::channel::message::embed::Embed;

use crate::embed::build_page_embed;

use super::category::{Categories, Category, Page};
use super::config::Action;
use super::error::PaginatorError;

/// Zero-based position inside the registry.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    pub category: usize,
    pub page: usize,
}

/// Outcome of applying an [`Action`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Transition {
    /// Cursor moved; the page must be re-rendered.
    Moved,
    /// Precondition did not hold; nothing changed.
    Unchanged,
    /// The stop slot fired.
    Stop,
}

/// Categories plus the cursor walking them.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    categories: Categories,
    cursor: Cursor,
}

impl Navigator {
    pub fn new(categories: Categories) -> Self {
        Self {
            categories,
            cursor: Cursor::default(),
        }
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// Registration is append-only, so the cursor stays valid.
    pub fn categories_mut(&mut self) -> &mut Categories {
        &mut self.categories
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Category and page under the cursor, `None` when nothing is registered.
    pub fn current(&self) -> Option<(&Category, &Page)> {
        let category = self.categories.get(self.cursor.category)?;
        let page = category.pages.get(self.cursor.page)?;
        Some((category, page))
    }

    /// Apply one navigation action with boundary clamping.
    pub fn apply(&mut self, action: Action) -> Transition {
        if action == Action::Stop {
            return Transition::Stop;
        }

        let category_count = self.categories.len();
        if category_count == 0 {
            return Transition::Unchanged;
        }

        let last_category = category_count - 1;
        let last_page = self
            .categories
            .page_count(self.cursor.category)
            .saturating_sub(1);

        let Cursor { category, page } = self.cursor;
        let next = match action {
            Action::First if category > 0 => Cursor {
                category: 0,
                page: 0,
            },
            Action::Previous if page > 0 => Cursor {
                category,
                page: page - 1,
            },
            Action::Next if page < last_page => Cursor {
                category,
                page: page + 1,
            },
            Action::Last if category < last_category => Cursor {
                category: last_category,
                page: 0,
            },
            _ => return Transition::Unchanged,
        };

        self.cursor = next;
        Transition::Moved
    }

    /// Render the page under the cursor.
    pub fn render(&self) -> Result<Embed, PaginatorError> {
        let (category, page) = self.current().ok_or(PaginatorError::NoCategories)?;
        let embed = build_page_embed(category.title.as_deref(), page, category.footer.as_deref())?;
        Ok(embed)
    }
}

impl fmt::Display for Navigator {
    /// Writes the body of the current page.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current() {
            Some((_, Page::Text(text))) => f.write_str(text),
            Some((_, Page::Fields(fields))) => {
                for (index, field) in fields.iter().enumerate() {
                    if index > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                Ok(())
            }
            Some((_, Page::Empty)) | None => Ok(()),
        }
    }
}
