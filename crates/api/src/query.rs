//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for file listings (`?include_disabled=`).
///
/// The public listing shows enabled files only; the admin grid passes
/// `include_disabled=true` to edit the full set.
#[derive(Debug, Deserialize)]
pub struct IncludeDisabledParams {
    #[serde(default)]
    pub include_disabled: bool,
}
