mod errors;
pub use errors::{Errors, Feedback};

mod escape;
use escape::{escape_attr, escape_text};

mod source;
pub use source::{EntitySource, MappingSource, ValueSource};

use crate::{Result, Value};

use indexmap::IndexMap;

/// Renders labeled form field fragments from a data source and a validation
/// error map.
///
/// The source is either submitted key-value data ([`MappingSource`]) or a
/// loaded entity ([`EntitySource`]); the renderer only sees the
/// [`ValueSource`] interface. Both bindings are fixed at construction, so
/// every render call observes the same snapshot.
pub struct Form<S> {
    source: S,
    errors: Errors,
}

impl<S: ValueSource> Form<S> {
    pub fn new(source: S, errors: Errors) -> Self {
        Form { source, errors }
    }

    /// Resolves the current value for a field key.
    ///
    /// Date-time values are normalized to their canonical
    /// `YYYY-MM-DD HH:MM:SS` string here, before they can reach markup.
    pub fn value(&self, key: &str) -> Result<Value> {
        Ok(match self.source.value(key)? {
            value @ Value::DateTime(_) => Value::String(value.to_form_string()),
            value => value,
        })
    }

    /// A labeled single-line input.
    ///
    /// The field type is `password` exactly when the key is `password`.
    pub fn input(&self, key: &str, label: &str) -> Result<String> {
        let value = self.value(key)?.to_form_string();
        let ty = if key == "password" { "password" } else { "text" };

        Ok(format!(
            "<div class=\"form-group\">\
             <label for=\"field{key}\">{label}</label>\
             <input type=\"{ty}\" id=\"field{key}\" class=\"{class}\" \
             name=\"{key}\" value=\"{value}\" required>\
             {feedback}\
             </div>",
            label = escape_text(label),
            class = self.input_class(key),
            value = escape_attr(&value),
            feedback = self.error_feedback(key),
        ))
    }

    /// A labeled multi-line textarea. The value is element content rather
    /// than an attribute.
    pub fn textarea(&self, key: &str, label: &str) -> Result<String> {
        let value = self.value(key)?.to_form_string();

        Ok(format!(
            "<div class=\"form-group\">\
             <label for=\"field{key}\">{label}</label>\
             <textarea id=\"field{key}\" class=\"{class}\" \
             name=\"{key}\" required>{value}</textarea>\
             {feedback}\
             </div>",
            label = escape_text(label),
            class = self.input_class(key),
            value = escape_text(&value),
            feedback = self.error_feedback(key),
        ))
    }

    /// A labeled multi-select.
    ///
    /// Options render in the caller's order; an option is marked selected
    /// exactly when its key is a member of the resolved value collection. The
    /// control always submits as a multi-valued field (`name="{key}[]"`).
    pub fn select(
        &self,
        key: &str,
        label: &str,
        options: &IndexMap<String, String>,
    ) -> Result<String> {
        let selected = self.selected_values(key)?;

        let options_html: String = options
            .iter()
            .map(|(option, option_label)| {
                let marker = if selected.iter().any(|s| s == option) {
                    " selected"
                } else {
                    ""
                };
                format!(
                    "<option value=\"{value}\"{marker}>{label}</option>",
                    value = escape_attr(option),
                    label = escape_text(option_label),
                )
            })
            .collect();

        Ok(format!(
            "<div class=\"form-group\">\
             <label for=\"field{key}\">{label}</label>\
             <select id=\"field{key}\" class=\"{class}\" \
             name=\"{key}[]\" required multiple>{options_html}</select>\
             {feedback}\
             </div>",
            label = escape_text(label),
            class = self.input_class(key),
            feedback = self.error_feedback(key),
        ))
    }

    /// The CSS classes for a field's control: the base class, plus the
    /// invalid marker exactly when the error map has an entry for the key.
    pub fn input_class(&self, key: &str) -> String {
        let mut class = String::from("form-control");
        if self.errors.contains(key) {
            class.push_str(" is-invalid");
        }
        class
    }

    /// The error feedback fragment for a field: empty when the error map has
    /// no entry, otherwise the message (or messages joined by `<br>`,
    /// preserving order).
    pub fn error_feedback(&self, key: &str) -> String {
        let Some(feedback) = self.errors.get(key) else {
            return String::new();
        };

        let joined = match feedback {
            Feedback::One(message) => escape_text(message),
            Feedback::Many(messages) => messages
                .iter()
                .map(|m| escape_text(m))
                .collect::<Vec<_>>()
                .join("<br>"),
        };

        format!("<div class=\"invalid-feedback\">{joined}</div>")
    }

    /// The resolved value collection for a multi-select: null resolves to no
    /// selection, a list to its members, and a scalar counts as a
    /// one-element collection.
    fn selected_values(&self, key: &str) -> Result<Vec<String>> {
        Ok(match self.value(key)? {
            Value::Null => vec![],
            Value::List(items) => items.iter().map(Value::to_form_string).collect(),
            scalar => vec![scalar.to_form_string()],
        })
    }
}
