//! All supported localization resource file formats for langpack.
//!
//! This module re-exports the main types for each format and provides
//! the [`FormatType`] enum for generic format handling across the crate.

pub mod json;
pub mod properties;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

// Reexporting the formats for easier access
pub use json::Format as JsonFormat;
pub use properties::Format as PropertiesFormat;

use crate::Error;

/// Represents all supported resource file formats for generic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Java `.properties` format: one `key=value` pair per line, depth 1.
    Properties,
    /// JSON object format, arbitrarily nested.
    Json,
}

impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Properties => write!(f, "properties"),
            FormatType::Json => write!(f, "json"),
        }
    }
}

/// Accepts the case-insensitive strings `"properties"`/`"props"` and
/// `"json"`. Returns [`Error::UnsupportedFormat`] for anything else.
impl FromStr for FormatType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "properties" | "props" => Ok(FormatType::Properties),
            "json" => Ok(FormatType::Json),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl FormatType {
    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Properties => "properties",
            FormatType::Json => "json",
        }
    }
}

/// Infers a [`FormatType`] from a file path's extension.
///
/// Returns `Some(FormatType)` if the extension matches a known format,
/// otherwise `None`.
///
/// # Example
/// ```rust
/// use langpack::formats::{FormatType, infer_format_from_extension};
/// assert_eq!(
///     infer_format_from_extension("messages.properties"),
///     Some(FormatType::Properties)
/// );
/// assert_eq!(infer_format_from_extension("en.json"), Some(FormatType::Json));
/// assert_eq!(infer_format_from_extension("notes.txt"), None);
/// ```
pub fn infer_format_from_extension<P: AsRef<Path>>(path: P) -> Option<FormatType> {
    match path.as_ref().extension().and_then(|s| s.to_str()) {
        Some("properties") => Some(FormatType::Properties),
        Some("json") => Some(FormatType::Json),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_type_display() {
        assert_eq!(FormatType::Properties.to_string(), "properties");
        assert_eq!(FormatType::Json.to_string(), "json");
    }

    #[test]
    fn test_format_type_from_str() {
        assert_eq!(
            FormatType::from_str("properties").unwrap(),
            FormatType::Properties
        );
        assert_eq!(
            FormatType::from_str("PROPERTIES").unwrap(),
            FormatType::Properties
        );
        assert_eq!(FormatType::from_str("props").unwrap(), FormatType::Properties);
        assert_eq!(FormatType::from_str("json").unwrap(), FormatType::Json);
        assert_eq!(FormatType::from_str("  json  ").unwrap(), FormatType::Json);
    }

    #[test]
    fn test_format_type_from_str_invalid() {
        assert!(FormatType::from_str("yaml").is_err());
        assert!(FormatType::from_str("").is_err());
    }

    #[test]
    fn test_format_type_extension() {
        assert_eq!(FormatType::Properties.extension(), "properties");
        assert_eq!(FormatType::Json.extension(), "json");
    }

    #[test]
    fn test_infer_format_from_extension() {
        assert_eq!(
            infer_format_from_extension("dir/messages.properties"),
            Some(FormatType::Properties)
        );
        assert_eq!(
            infer_format_from_extension("dir/en.json"),
            Some(FormatType::Json)
        );
        assert_eq!(infer_format_from_extension("dir/notes.txt"), None);
        assert_eq!(infer_format_from_extension("no_extension"), None);
    }
}
