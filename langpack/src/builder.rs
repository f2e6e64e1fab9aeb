//! Builds a translated language pack from a single resource file.
//!
//! The whole pipeline is one linear pass: load the document, walk it while
//! translating every leaf string, write the result next to the input with
//! the target language code appended to the file name. Serialization only
//! happens after the entire translated tree is in memory, so a failure
//! partway through leaves no output file behind.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    error::Error,
    formats::{FormatType, JsonFormat, PropertiesFormat, infer_format_from_extension},
    lang::TargetLanguage,
    traits::Parser,
    translate::{SOURCE_LANGUAGE, Translate},
    types::{Document, Value},
};

/// Translates one resource file into one target language.
///
/// # Example
///
/// ```rust,no_run
/// use langpack::PackBuilder;
///
/// let stub = |text: &str, _: &str, _: &str| Ok(format!("[uk] {text}"));
/// let output = PackBuilder::new(stub, "uk", "i18n/messages.properties")?.process()?;
/// println!("wrote {}", output.display());
/// # Ok::<(), langpack::Error>(())
/// ```
pub struct PackBuilder<T: Translate> {
    translator: T,
    target: TargetLanguage,
    input: PathBuf,
}

impl<T: Translate> std::fmt::Debug for PackBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackBuilder")
            .field("target", &self.target)
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

impl<T: Translate> PackBuilder<T> {
    /// Creates a builder for one input file and one target language.
    ///
    /// Fails with [`Error::InvalidPath`] if `input` does not exist and
    /// with [`Error::InvalidLanguage`] if `target_language` is not an
    /// ISO 639-1 code. Both checks run before any translation work.
    pub fn new(
        translator: T,
        target_language: &str,
        input: impl Into<PathBuf>,
    ) -> Result<Self, Error> {
        let input = input.into();
        if !input.exists() {
            return Err(Error::InvalidPath(input));
        }
        let target = target_language.parse::<TargetLanguage>()?;

        Ok(PackBuilder {
            translator,
            target,
            input,
        })
    }

    /// The validated target language.
    pub fn target(&self) -> &TargetLanguage {
        &self.target
    }

    /// The input resource file.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Translates the input file and writes the result.
    ///
    /// The format is determined by the input path's extension; anything
    /// other than `.properties` or `.json` fails with
    /// [`Error::UnsupportedFormat`] before any file is read. Returns the
    /// path of the written output file.
    pub fn process(&self) -> Result<PathBuf, Error> {
        let format = infer_format_from_extension(&self.input).ok_or_else(|| {
            Error::UnsupportedFormat(
                self.input
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned(),
            )
        })?;

        let document = match format {
            FormatType::Properties => Document::from(PropertiesFormat::read_from(&self.input)?),
            FormatType::Json => Document::try_from(JsonFormat::read_from(&self.input)?)?,
        };

        info!(
            leaves = document.leaf_count(),
            language = %self.target,
            "translating resource file"
        );

        let translated = self.translate_document(&document)?;
        let output = derive_output_path(&self.input, self.target.code());

        match format {
            FormatType::Properties => {
                PropertiesFormat::from_document(self.target.code(), &translated)?.write_to(&output)?
            }
            FormatType::Json => JsonFormat::from(translated).write_to(&output)?,
        }

        Ok(output)
    }

    /// Structure-preserving translation walk: same keys, same nesting,
    /// same entry order; only leaf strings change. The input document is
    /// left untouched.
    fn translate_document(&self, document: &Document) -> Result<Document, Error> {
        let mut translated = Document::new();
        for entry in document.iter() {
            translated.insert(entry.key.clone(), self.translate_value(&entry.key, &entry.value)?);
        }
        Ok(translated)
    }

    fn translate_value(&self, key: &str, value: &Value) -> Result<Value, Error> {
        match value {
            Value::Text(text) => {
                debug!(key, "translating leaf");
                let translated =
                    self.translator
                        .translate(text, SOURCE_LANGUAGE, self.target.code())?;
                Ok(Value::Text(translated))
            }
            Value::Nested(nested) => Ok(Value::Nested(self.translate_document(nested)?)),
        }
    }
}

/// Derives the output path for a translated resource file: same
/// directory, same extension, base name suffixed with the language code.
///
/// # Example
/// ```rust
/// use std::path::PathBuf;
/// use langpack::builder::derive_output_path;
///
/// assert_eq!(
///     derive_output_path("i18n/messages.properties".as_ref(), "uk"),
///     PathBuf::from("i18n/messages_uk.properties")
/// );
/// ```
pub fn derive_output_path(input: &Path, language: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let mut name = format!("{stem}_{language}");
    if let Some(extension) = input.extension().and_then(|s| s.to_str()) {
        name.push('.');
        name.push_str(extension);
    }
    input.with_file_name(name)
}
