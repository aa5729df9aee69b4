use indexmap::IndexMap;

/// The validation messages attached to one field: a single message or an
/// ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for Feedback {
    fn from(message: &str) -> Self {
        Feedback::One(message.to_string())
    }
}

impl From<String> for Feedback {
    fn from(message: String) -> Self {
        Feedback::One(message)
    }
}

impl From<Vec<String>> for Feedback {
    fn from(messages: Vec<String>) -> Self {
        Feedback::Many(messages)
    }
}

impl From<Vec<&str>> for Feedback {
    fn from(messages: Vec<&str>) -> Self {
        Feedback::Many(messages.into_iter().map(str::to_string).collect())
    }
}

/// Validation errors keyed by field, in insertion order.
///
/// Produced by the (external) validation layer; the renderer only reads it.
#[derive(Debug, Default)]
pub struct Errors {
    entries: IndexMap<String, Feedback>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, feedback: impl Into<Feedback>) {
        self.entries.insert(key.into(), feedback.into());
    }

    pub fn get(&self, key: &str) -> Option<&Feedback> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, F: Into<Feedback>> FromIterator<(K, F)> for Errors {
    fn from_iter<I: IntoIterator<Item = (K, F)>>(iter: I) -> Self {
        Errors {
            entries: iter
                .into_iter()
                .map(|(k, f)| (k.into(), f.into()))
                .collect(),
        }
    }
}
