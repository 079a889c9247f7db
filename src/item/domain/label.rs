//! Validated text values attached to laundry items.

use super::ItemDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, trimmed item label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemLabel(String);

impl ItemLabel {
    /// Creates a validated label.
    ///
    /// # Errors
    ///
    /// Returns [`ItemDomainError::EmptyLabel`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ItemDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ItemDomainError::EmptyLabel);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemLabel {
    type Error = ItemDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemLabel> for String {
    fn from(label: ItemLabel) -> Self {
        label.0
    }
}

impl AsRef<str> for ItemLabel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ItemLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trims optional free text, mapping blank values to `None`.
///
/// Absent attributes mean "unknown"; a blank string carries no more
/// information than an absent one.
#[must_use]
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
