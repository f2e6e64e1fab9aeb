//! Support for the Java `.properties` localization format.
//!
//! Provides parsing, serialization, and conversion to/from the internal
//! `Document` model. The format is inherently flat: every value is a leaf
//! string, so converting a nested document into it is an error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use indoc::indoc;

use crate::{
    error::Error,
    traits::Parser,
    types::{Document, Value},
};

/// Represents a `.properties` resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Language code for this resource, if known (typically empty for
    /// hand-written files; filled from a `#: Language:` header line).
    pub language: String,
    /// All key-value pairs in the file, in file order.
    pub pairs: Vec<Pair>,
}

/// A single key-value pair in a `.properties` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Format {
    /// Builds a `.properties` representation of a flat document.
    ///
    /// Fails with [`Error::DataMismatch`] if the document contains nested
    /// entries, since the format has no way to represent them.
    pub fn from_document(language: impl Into<String>, document: &Document) -> Result<Self, Error> {
        let pairs = document
            .iter()
            .map(|entry| match &entry.value {
                Value::Text(text) => Ok(Pair {
                    key: entry.key.clone(),
                    value: text.clone(),
                }),
                Value::Nested(_) => Err(Error::DataMismatch(format!(
                    "nested entry `{}` cannot be represented in the properties format",
                    entry.key
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Format {
            language: language.into(),
            pairs,
        })
    }
}

impl From<Format> for Document {
    fn from(value: Format) -> Self {
        value
            .pairs
            .into_iter()
            .map(|pair| (pair.key, Value::Text(pair.value)))
            .collect()
    }
}

impl Parser for Format {
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        let content = reader.lines().collect::<Result<Vec<_>, _>>()?.join("\n");

        let mut language = String::new();
        let mut pairs = Vec::new();

        for line in logical_lines(&content) {
            let trimmed = line.trim_start();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(rest) = trimmed.strip_prefix("#:") {
                // Header line carrying metadata, e.g. "#: Language: uk"
                let parts: Vec<&str> = rest.splitn(2, ':').collect();
                if parts.len() == 2 && parts[0].trim() == "Language" {
                    language = parts[1].trim().to_string();
                }
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let Some(separator) = find_separator(trimmed) else {
                continue; // line without a separator, nothing to keep
            };

            let key = unescape(trim_unescaped_end(&trimmed[..separator]));
            let value = unescape(trimmed[separator + 1..].trim_start());
            pairs.push(Pair { key, value });
        }

        Ok(Format { language, pairs })
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut content = format!(
            indoc! {"
            # This file is automatically generated by langpack.
            # Do not edit it manually, as your changes will be overwritten.
            #
            #: Language: {}
            #

            "},
            self.language
        );

        for pair in &self.pairs {
            content.push_str(&escape_key(&pair.key));
            content.push('=');
            content.push_str(&escape_value(&pair.value));
            content.push('\n');
        }

        writer.write_all(content.as_bytes()).map_err(Error::Io)
    }

    /// Override default file reading to support BOM-aware decoding.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        // Auto-detect BOM, decode to UTF-8; passthrough UTF-8
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded)
    }
}

/// Joins physical lines into logical ones: a non-comment line ending with
/// an odd number of backslashes continues on the next line, with the
/// continuation's leading whitespace dropped.
fn logical_lines(content: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            result.push(trimmed.to_string());
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }
        result.push(logical);
    }

    result
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Index of the first unescaped `=` or `:`, the key/value separator.
fn find_separator(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return Some(index),
            _ => {}
        }
    }
    None
}

/// Trims trailing whitespace, keeping whitespace preceded by a backslash.
fn trim_unescaped_end(s: &str) -> &str {
    let mut end = s.len();
    for (index, c) in s.char_indices().rev() {
        if !c.is_whitespace() || s[..index].ends_with('\\') {
            break;
        }
        end = index;
    }
    &s[..end]
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

fn escape_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            ' ' | '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

fn escape_value(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (index, c) in s.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            // A leading space would be trimmed on parse.
            ' ' if index == 0 => out.push_str("\\ "),
            _ => out.push(c),
        }
    }
    out
}
