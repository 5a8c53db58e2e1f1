use indexmap::IndexMap;
use serde::Serialize;

/// Per-field validation messages.
///
/// A field without messages has no entry: the report never holds an empty
/// list. Messages keep the order in which they were produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    errors: IndexMap<String, Vec<String>>,
}

impl ErrorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_error(&mut self, field: &str, error: String) {
        match self.errors.get_mut(field) {
            Some(errors) => errors.push(error),
            None => {
                let _ = self.errors.insert(field.to_string(), vec![error]);
            }
        }
    }

    /// Append several messages for `field`. Nothing is recorded when `errors`
    /// is empty.
    pub fn extend_errors(&mut self, field: &str, errors: Vec<String>) {
        for error in errors {
            self.push_error(field, error);
        }
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.errors.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = &String> {
        self.errors.keys()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.errors
    }
}
