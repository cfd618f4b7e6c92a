//! Posting types: the stored [`Item`] and the draft it starts out as.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::image::ImageAttachment;

/// Whether a posting reports something lost or something found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Lost,
    Found,
}

impl ItemKind {
    /// Both partitions, lost first.
    pub const ALL: [ItemKind; 2] = [ItemKind::Lost, ItemKind::Found];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }

    /// Label used on item cards.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            ItemKind::Lost => "Lost",
            ItemKind::Found => "Found",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown item type '{0}'. Expected 'lost' or 'found'")]
pub struct UnknownKindError(pub String);

impl FromStr for ItemKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lost" => Ok(ItemKind::Lost),
            "found" => Ok(ItemKind::Found),
            _ => Err(UnknownKindError(s.to_string())),
        }
    }
}

/// The fixed set of categories a posting can belong to.
///
/// Serialized as the display name, so stored data reads `"Sports Equipment"`
/// rather than a Rust-style identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Accessories,
    Books,
    Bags,
    Jewelry,
    Keys,
    Documents,
    #[serde(rename = "Sports Equipment")]
    SportsEquipment,
    Other,
}

impl Category {
    /// Every category in the order the posting form lists them.
    pub const ALL: [Category; 10] = [
        Category::Electronics,
        Category::Clothing,
        Category::Accessories,
        Category::Books,
        Category::Bags,
        Category::Jewelry,
        Category::Keys,
        Category::Documents,
        Category::SportsEquipment,
        Category::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
            Category::Books => "Books",
            Category::Bags => "Bags",
            Category::Jewelry => "Jewelry",
            Category::Keys => "Keys",
            Category::Documents => "Documents",
            Category::SportsEquipment => "Sports Equipment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategoryError(pub String);

impl FromStr for Category {
    type Err = UnknownCategoryError;

    /// Case-insensitive; `-` and `_` are accepted in place of spaces so that
    /// `sports-equipment` works on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_category(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize_category(c.as_str()) == wanted)
            .ok_or_else(|| UnknownCategoryError(s.to_string()))
    }
}

fn normalize_category(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// A stored lost-or-found posting.
///
/// Field names on the wire match the browser data this board started out
/// with, so an exported slot can be loaded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub location: String,
    pub contact_email: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_phone: Option<String>,
    /// `data:` URI of the attached photo.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    pub date_posted: DateTime<Utc>,
}

/// Older data stores absent optional fields as `""`.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Raw form input for a new posting, before admission.
///
/// Text fields are kept exactly as typed; trimming and checks happen in
/// [`validate_draft`](super::validation::validate_draft).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub kind: ItemKind,
    pub title: String,
    /// Category display name; empty means none was chosen.
    pub category: String,
    pub description: String,
    pub location: String,
    pub contact_email: String,
    /// Empty means no phone number.
    pub contact_phone: String,
    pub image: Option<ImageAttachment>,
}

/// A candidate that passed admission. Only
/// [`validate_draft`](super::validation::validate_draft) builds one, so the
/// store never sees an unchecked posting.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub(crate) kind: ItemKind,
    pub(crate) title: String,
    pub(crate) category: Category,
    pub(crate) description: String,
    pub(crate) location: String,
    pub(crate) contact_email: String,
    pub(crate) contact_phone: Option<String>,
    pub(crate) image: Option<String>,
}

impl NewItem {
    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Stamp the candidate with its identity and posting time.
    #[must_use]
    pub fn into_item(self, id: String, date_posted: DateTime<Utc>) -> Item {
        Item {
            id,
            kind: self.kind,
            title: self.title,
            category: self.category,
            description: self.description,
            location: self.location,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            image: self.image,
            date_posted,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
