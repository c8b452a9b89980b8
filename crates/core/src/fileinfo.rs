//! File info derivation for publication files.
//!
//! A file's display info is its type (uppercased extension of the attached
//! asset) and human-readable size, space-joined. Both components are
//! optional: whatever is unavailable is simply omitted, and the result is
//! never an error.

// ---------------------------------------------------------------------------
// Extension / type
// ---------------------------------------------------------------------------

/// Extension of a file name, without the dot.
///
/// Returns `None` for names with no extension and for dotfiles.
pub fn file_extension(file_name: &str) -> Option<&str> {
    let idx = file_name.rfind('.')?;
    let ext = &file_name[idx + 1..];
    if idx == 0 || ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext)
}

/// Display type for a file: its extension, uppercased.
pub fn file_type(extension: &str) -> String {
    extension.to_uppercase()
}

// ---------------------------------------------------------------------------
// Size formatting
// ---------------------------------------------------------------------------

/// Format a byte count as a human-readable size.
///
/// Bytes below 1 KB are spelled out ("532 bytes"); larger sizes use KB, MB,
/// GB or TB with at most one decimal place ("1.5 KB", "2 MB"). Negative
/// input is treated as zero.
pub fn format_byte_size(bytes: i64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    let bytes = bytes.max(0);
    if bytes == 1 {
        return "1 byte".to_string();
    }
    if bytes < 1024 {
        return format!("{bytes} bytes");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as i64, UNITS[unit])
    } else {
        format!("{:.1} {}", rounded, UNITS[unit])
    }
}

// ---------------------------------------------------------------------------
// Info string
// ---------------------------------------------------------------------------

/// Join the available info components with a single space.
///
/// Absent or empty components are skipped, so the result carries no leading
/// or trailing separator; with nothing available it is the empty string.
pub fn file_info(file_type: Option<&str>, size: Option<&str>) -> String {
    [file_type, size]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_of_simple_name() {
        assert_eq!(file_extension("report.pdf"), Some("pdf"));
    }

    #[test]
    fn extension_of_multi_dot_name() {
        assert_eq!(file_extension("minutes.2018.tar.gz"), Some("gz"));
    }

    #[test]
    fn extension_absent() {
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".hidden"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn type_is_uppercased() {
        assert_eq!(file_type("pdf"), "PDF");
        assert_eq!(file_type("xlsx"), "XLSX");
    }

    #[test]
    fn size_in_bytes() {
        assert_eq!(format_byte_size(0), "0 bytes");
        assert_eq!(format_byte_size(1), "1 byte");
        assert_eq!(format_byte_size(532), "532 bytes");
    }

    #[test]
    fn size_in_kilobytes() {
        assert_eq!(format_byte_size(1024), "1 KB");
        assert_eq!(format_byte_size(1536), "1.5 KB");
    }

    #[test]
    fn size_in_megabytes() {
        assert_eq!(format_byte_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_byte_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }

    #[test]
    fn size_in_gigabytes() {
        assert_eq!(format_byte_size(1288490189), "1.2 GB");
    }

    #[test]
    fn negative_size_is_zero() {
        assert_eq!(format_byte_size(-42), "0 bytes");
    }

    #[test]
    fn info_with_both_components() {
        assert_eq!(file_info(Some("PDF"), Some("2 MB")), "PDF 2 MB");
    }

    #[test]
    fn info_with_missing_size_has_no_trailing_separator() {
        assert_eq!(file_info(Some("PDF"), None), "PDF");
        assert_eq!(file_info(Some("PDF"), Some("")), "PDF");
    }

    #[test]
    fn info_with_missing_type_has_no_leading_separator() {
        assert_eq!(file_info(None, Some("2 MB")), "2 MB");
    }

    #[test]
    fn info_with_nothing_available_is_empty() {
        assert_eq!(file_info(None, None), "");
    }
}
