//! Lost-and-found postings and the admission rules they must pass.

mod id;
mod image;
mod types;
mod validation;

pub use id::new_item_id;
pub use image::{mime_for_path, ImageAttachment, ImageError, DEFAULT_MAX_IMAGE_BYTES};
pub use types::{
    Category, Item, ItemDraft, ItemKind, NewItem, UnknownCategoryError, UnknownKindError,
};
pub use validation::{
    is_valid_email, validate_draft, AdmissionRules, Field, FieldError, ValidationError,
};
