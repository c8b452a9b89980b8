//! Storage-key naming convention for uploaded publication assets.
//!
//! Keys are deterministic given the unique component, which the caller
//! supplies (a UUID in practice). The original file name is sanitized so
//! keys stay safe for URL paths and object stores.

/// Folder prefix under which all publication assets are stored.
pub const ASSET_FOLDER: &str = "publications/files";

/// Build the storage key for an uploaded asset.
///
/// Convention: `publications/files/{unique}/{sanitized-file-name}`.
pub fn asset_storage_key(unique: &str, file_name: &str) -> String {
    format!("{ASSET_FOLDER}/{unique}/{}", sanitize_file_name(file_name))
}

/// Sanitize a file name for use in a storage key.
///
/// Keeps ASCII alphanumerics, dots, dashes and underscores; everything else
/// (spaces, path separators, control characters) becomes a dash. An empty
/// input falls back to `"file"`.
fn sanitize_file_name(file_name: &str) -> String {
    let sanitized: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();

    if sanitized.trim_matches(|c| c == '.' || c == '-').is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_uses_folder_and_unique_component() {
        assert_eq!(
            asset_storage_key("01b2", "report.pdf"),
            "publications/files/01b2/report.pdf"
        );
    }

    #[test]
    fn spaces_become_dashes() {
        assert_eq!(
            asset_storage_key("a1", "annual report 2018.pdf"),
            "publications/files/a1/annual-report-2018.pdf"
        );
    }

    #[test]
    fn path_separators_are_neutralized() {
        assert_eq!(
            asset_storage_key("a1", "../../etc/passwd"),
            "publications/files/a1/------etc-passwd"
        );
    }

    #[test]
    fn empty_name_falls_back() {
        assert_eq!(asset_storage_key("a1", ""), "publications/files/a1/file");
        assert_eq!(asset_storage_key("a1", "..."), "publications/files/a1/file");
    }
}
