//! Editing-form metadata for the admin UI.
//!
//! The admin collaborator renders editing forms from field descriptors
//! rather than hard-coding each entity's form. Each entity exposes its
//! field list here; labels are the display strings, names match the API
//! DTO fields.

use serde::Serialize;

use crate::error::CoreError;
use crate::sort::SortOrder;

// ---------------------------------------------------------------------------
// Field descriptors
// ---------------------------------------------------------------------------

/// Widget kind for an editing-form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextArea,
    Date,
    Number,
    Checkbox,
    Dropdown,
    Upload,
    Grid,
}

/// One option of a dropdown field.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One editing-form field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: false, options: None }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = Some(options);
        self
    }
}

// ---------------------------------------------------------------------------
// Per-entity field lists
// ---------------------------------------------------------------------------

/// Editing fields for a publication archive.
pub fn archive_fields() -> Vec<FieldSpec> {
    let sort_options = SortOrder::options()
        .into_iter()
        .map(|(value, label)| SelectOption { value, label })
        .collect();

    vec![
        FieldSpec::new("title", "Title", FieldKind::Text).required(),
        FieldSpec::new("sort_order", "Sort order", FieldKind::Dropdown)
            .with_options(sort_options),
        FieldSpec::new("show_file_info", "Show file information", FieldKind::Checkbox),
    ]
}

/// Editing fields for a publication category.
pub fn category_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("title", "Title", FieldKind::Text).required(),
        FieldSpec::new("show_on_separate_page", "Show on separate page", FieldKind::Checkbox),
        FieldSpec::new("show_content_in_archive", "Show content in archive", FieldKind::Checkbox),
    ]
}

/// Editing fields for a publication.
pub fn publication_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("title", "Title", FieldKind::Text).required(),
        FieldSpec::new("date", "Date", FieldKind::Date),
        FieldSpec::new("content", "Overview", FieldKind::TextArea),
        FieldSpec::new("author", "Author", FieldKind::Text),
        FieldSpec::new("pages", "Pages", FieldKind::Number),
        FieldSpec::new("files", "Files", FieldKind::Grid),
    ]
}

/// Editing fields for a publication file.
pub fn publication_file_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", "Name", FieldKind::Text).required(),
        FieldSpec::new("asset_id", "File", FieldKind::Upload).required(),
        FieldSpec::new("disabled", "Disabled", FieldKind::Checkbox),
    ]
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the required fields of a publication file at save time.
///
/// The attached asset is enforced structurally (`asset_id` is not
/// optional); the name must be non-empty after trimming.
pub fn validate_publication_file(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name is required".into()));
    }
    Ok(())
}

/// Validate an entity title at save time.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".into()));
    }
    Ok(())
}
