//! Stanza data model for OBO `[Term]` blocks.
//!
//! A stanza is an ordered mapping from field name to the ordered list of
//! values declared for that field. Repeated declarations accumulate rather
//! than overwrite, and field order is first-seen order, so a stanza can be
//! rendered back in roughly the shape it had in the file.

/// Field name under which raw tab-bearing lines are collected for diagnosis.
pub const TAB_FIELD: &str = "tab";

/// One `[Term]` block of the input file.
///
/// Identity within a run is the sequence number, not the `id` field: the
/// `id` may be missing or malformed, and the validator still needs a way to
/// point at the stanza.
#[derive(Debug, Clone, Default)]
pub struct Stanza {
    /// Position of this stanza in the file, starting at 1.
    pub seq: usize,
    fields: Vec<(String, Vec<String>)>,
}

impl Stanza {
    pub fn new(seq: usize) -> Self {
        Self {
            seq,
            fields: Vec::new(),
        }
    }

    /// Append a value to the named field, creating the field on first use.
    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        if let Some((_, values)) = self.fields.iter_mut().find(|(n, _)| n == name) {
            values.push(value.into());
        } else {
            self.fields.push((name.to_string(), vec![value.into()]));
        }
    }

    /// All values declared for a field, in file order.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// The primary identifier: the first `id` value, if any.
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(|v| v.first()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the stanza's fields on one line, for diagnostics on stanzas
    /// that cannot be named by their id.
    pub fn render(&self) -> String {
        let mut parts = Vec::new();
        for (name, values) in &self.fields {
            for value in values {
                parts.push(format!("{}: {}", name, value));
            }
        }
        parts.join("; ")
    }
}
