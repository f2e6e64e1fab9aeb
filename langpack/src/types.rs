//! Core, format-agnostic types for langpack.
//! Format adapters decode into these; the translation walk transforms them.

/// A single value in a resource document: either a translatable leaf
/// string or a nested sub-document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A translatable leaf string.
    Text(String),

    /// A nested sub-document whose values are themselves leaves or
    /// further nested documents.
    Nested(Document),
}

impl Value {
    /// Returns the leaf text, if this value is a leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Nested(_) => None,
        }
    }

    /// Returns the nested document, if this value is one.
    pub fn as_nested(&self) -> Option<&Document> {
        match self {
            Value::Text(_) => None,
            Value::Nested(document) => Some(document),
        }
    }
}

/// One key/value entry of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The key for this entry, unchanged by translation.
    pub key: String,

    /// The value for this entry.
    pub value: Value,
}

/// An in-memory localization resource document.
///
/// Entries keep the order in which they were inserted, which after
/// parsing is file order, so serialized output lines up with the source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Ordered list of all entries in this document.
    pub entries: Vec<Entry>,
}

impl Document {
    /// Creates a new, empty document.
    pub fn new() -> Self {
        Document {
            entries: Vec::new(),
        }
    }

    /// Appends an entry, preserving insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.push(Entry {
            key: key.into(),
            value,
        });
    }

    /// Finds a value by its key, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Number of leaf strings in the whole tree.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| match &entry.value {
                Value::Text(_) => 1,
                Value::Nested(nested) => nested.leaf_count(),
            })
            .sum()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut document = Document::new();
        for (key, value) in iter {
            document.insert(key, value);
        }
        document
    }
}
