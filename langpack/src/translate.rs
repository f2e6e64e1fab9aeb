//! The translation capability boundary.
//!
//! The library never talks to a translation service itself; callers inject
//! an implementation of [`Translate`] when constructing a
//! [`PackBuilder`](crate::PackBuilder). Tests substitute a deterministic
//! stub the same way.

use crate::error::Error;

/// Source language of every input resource file.
pub const SOURCE_LANGUAGE: &str = "en";

/// A machine-translation backend.
///
/// Calls are synchronous and blocking; one leaf string per call. Failures
/// propagate to the caller untouched, with no retry.
pub trait Translate {
    /// Translate `text` from `source` to `target`.
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, Error>;
}

/// Plain functions and closures are translators, which keeps tests free
/// of network dependencies.
///
/// # Example
///
/// ```rust
/// use langpack::translate::Translate;
///
/// let upper = |text: &str, _: &str, _: &str| Ok(text.to_uppercase());
/// assert_eq!(upper.translate("hello", "en", "uk").unwrap(), "HELLO");
/// ```
impl<F> Translate for F
where
    F: Fn(&str, &str, &str) -> Result<String, Error>,
{
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, Error> {
        self(text, source, target)
    }
}
