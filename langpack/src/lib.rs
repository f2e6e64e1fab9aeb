#![forbid(unsafe_code)]
//! Generate translated language packs from localization resource files.
//!
//! Reads a Java `.properties` or JSON resource file, sends every leaf
//! string value to an injected machine-translation backend, and writes an
//! equivalent file next to the original with the target language code
//! appended to the name (`messages.properties` → `messages_uk.properties`).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langpack::PackBuilder;
//!
//! // Any `Fn(&str, &str, &str) -> Result<String, Error>` is a translator.
//! let translator = |text: &str, _source: &str, _target: &str| {
//!     Ok(format!("[translated] {text}"))
//! };
//!
//! let output = PackBuilder::new(translator, "uk", "i18n/messages.properties")?
//!     .process()?;
//! println!("wrote {}", output.display());
//! # Ok::<(), langpack::Error>(())
//! ```
//!
//! # Supported Formats
//!
//! - **Java `.properties`**: flat `key=value` pairs, UTF-8
//! - **JSON**: arbitrarily nested objects of strings, pretty-printed on
//!   output with key order preserved
//!
//! # Guarantees
//!
//! - The output document has exactly the keys, nesting, and entry order of
//!   the input; only leaf strings change.
//! - The target language is validated against ISO 639-1 before any
//!   translation call is made.
//! - Translation failures abort the run; no partial output file is written.

pub mod builder;
pub mod error;
pub mod formats;
pub mod lang;
pub mod traits;
pub mod translate;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    builder::{PackBuilder, derive_output_path},
    error::Error,
    formats::{FormatType, infer_format_from_extension},
    lang::TargetLanguage,
    translate::{SOURCE_LANGUAGE, Translate},
    types::{Document, Entry, Value},
};
