//! Admission gate for new postings.
//!
//! Every field is checked and all failures are reported together, so a form
//! can show a message next to each offending input.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

use super::image::DEFAULT_MAX_IMAGE_BYTES;
use super::types::{Category, ItemDraft, NewItem};

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("EMAIL_REGEX is a valid regex literal"));

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Category,
    Description,
    Location,
    ContactEmail,
    Image,
}

impl Field {
    /// Field name as used in stored data.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Category => "category",
            Field::Description => "description",
            Field::Location => "location",
            Field::ContactEmail => "contactEmail",
            Field::Image => "image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// A draft was rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// First message recorded for `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Limits applied during admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionRules {
    pub max_image_bytes: u64,
}

impl Default for AdmissionRules {
    fn default() -> Self {
        Self {
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

/// Check a basic `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a draft and, if it passes, turn it into a [`NewItem`].
///
/// Text fields are trimmed; an empty phone number becomes `None`; an attached
/// image is encoded to a `data:` URI.
pub fn validate_draft(draft: &ItemDraft, rules: &AdmissionRules) -> Result<NewItem, ValidationError> {
    let mut errors = Vec::new();
    let mut fail = |field: Field, message: String| errors.push(FieldError { field, message });

    let title = draft.title.trim();
    if title.is_empty() {
        fail(Field::Title, "Title is required".to_string());
    }

    let category_input = draft.category.trim();
    let category = if category_input.is_empty() {
        fail(Field::Category, "Category is required".to_string());
        None
    } else {
        match category_input.parse::<Category>() {
            Ok(category) => Some(category),
            Err(e) => {
                fail(Field::Category, e.to_string());
                None
            }
        }
    };

    let description = draft.description.trim();
    if description.is_empty() {
        fail(Field::Description, "Description is required".to_string());
    }

    let location = draft.location.trim();
    if location.is_empty() {
        fail(Field::Location, "Location is required".to_string());
    }

    let email = draft.contact_email.trim();
    if email.is_empty() {
        fail(Field::ContactEmail, "Email is required".to_string());
    } else if !is_valid_email(email) {
        fail(Field::ContactEmail, "Please enter a valid email".to_string());
    }

    if let Some(image) = &draft.image {
        if image.size() > rules.max_image_bytes || !image.is_loaded() {
            fail(Field::Image, image_limit_message(rules.max_image_bytes));
        }
    }

    match category {
        Some(category) if errors.is_empty() => {
            let phone = draft.contact_phone.trim();
            Ok(NewItem {
                kind: draft.kind,
                title: title.to_string(),
                category,
                description: description.to_string(),
                location: location.to_string(),
                contact_email: email.to_string(),
                contact_phone: (!phone.is_empty()).then(|| phone.to_string()),
                image: draft.image.as_ref().map(super::ImageAttachment::to_data_uri),
            })
        }
        _ => Err(ValidationError { errors }),
    }
}

fn image_limit_message(max_bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if max_bytes % MIB == 0 {
        format!("Image size should be less than {}MB", max_bytes / MIB)
    } else {
        format!("Image size should be less than {max_bytes} bytes")
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
