//! Raw user input for item mutations, validated before any request is sent.

use crate::item::domain::{
    ItemDetails, ItemDomainError, ItemId, ItemLabel, LaundryStatus, NewItem, StatusChange,
};

/// Request payload for registering a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemRequest {
    label: String,
    material: Option<String>,
    color: Option<String>,
    tag_id: Option<String>,
    status: LaundryStatus,
}

impl CreateItemRequest {
    /// Creates a request with the required label and the default status.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            material: None,
            color: None,
            tag_id: None,
            status: LaundryStatus::default(),
        }
    }

    /// Sets the material.
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Sets the colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the tag identifier.
    #[must_use]
    pub fn with_tag_id(mut self, tag_id: impl Into<String>) -> Self {
        self.tag_id = Some(tag_id.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: LaundryStatus) -> Self {
        self.status = status;
        self
    }

    /// Validates the request into an authority payload.
    ///
    /// # Errors
    ///
    /// Returns [`ItemDomainError::EmptyLabel`] when the label is blank.
    pub fn into_new_item(self) -> Result<NewItem, ItemDomainError> {
        let label = ItemLabel::new(self.label)?;
        Ok(NewItem::new(label)
            .with_material(self.material)
            .with_color(self.color)
            .with_tag_id(self.tag_id)
            .with_status(self.status))
    }
}

/// Request payload for changing an item's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    id: ItemId,
    status: LaundryStatus,
    note: Option<String>,
}

impl UpdateStatusRequest {
    /// Creates a status change request without a note.
    #[must_use]
    pub const fn new(id: ItemId, status: LaundryStatus) -> Self {
        Self {
            id,
            status,
            note: None,
        }
    }

    /// Attaches a note explaining the change.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Returns the target item.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Converts the request into a domain status change.
    ///
    /// A missing or blank note leaves the change without one.
    #[must_use]
    pub fn into_change(self) -> StatusChange {
        StatusChange::new(self.status).with_note(self.note.unwrap_or_default())
    }
}

/// Request payload for replacing an item's descriptive attributes.
///
/// Attributes left unset are cleared at the authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDetailsRequest {
    id: ItemId,
    label: String,
    material: Option<String>,
    color: Option<String>,
    tag_id: Option<String>,
}

impl UpdateDetailsRequest {
    /// Creates a details request carrying only the label.
    #[must_use]
    pub fn new(id: ItemId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            material: None,
            color: None,
            tag_id: None,
        }
    }

    /// Sets the material.
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Sets the colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the tag identifier.
    #[must_use]
    pub fn with_tag_id(mut self, tag_id: impl Into<String>) -> Self {
        self.tag_id = Some(tag_id.into());
        self
    }

    /// Returns the target item.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Validates the request into replacement details.
    ///
    /// # Errors
    ///
    /// Returns [`ItemDomainError::EmptyLabel`] when the label is blank.
    pub fn into_details(self) -> Result<ItemDetails, ItemDomainError> {
        let label = ItemLabel::new(self.label)?;
        Ok(ItemDetails::new(label)
            .with_material(self.material)
            .with_color(self.color)
            .with_tag_id(self.tag_id))
    }
}
