//! Case-insensitive text search over items.

use crate::item::domain::LaundryItem;

/// Normalised search text.
///
/// Surrounding whitespace is ignored and a blank query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery(String);

impl ItemQuery {
    /// Creates a query from raw user input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Returns `true` when the query matches every item.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the normalised search text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tests `item` against the label and any known material, colour or tag.
    #[must_use]
    pub fn matches(&self, item: &LaundryItem) -> bool {
        if self.is_empty() {
            return true;
        }
        std::iter::once(item.label().as_str())
            .chain(item.material())
            .chain(item.color())
            .chain(item.tag_id())
            .any(|field| field.to_lowercase().contains(&self.0))
    }
}

impl From<&str> for ItemQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Returns the items matching `query`, in input order.
#[must_use]
pub fn filter<'a>(items: &'a [LaundryItem], query: &ItemQuery) -> Vec<&'a LaundryItem> {
    items.iter().filter(|item| query.matches(item)).collect()
}
