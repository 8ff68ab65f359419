//! Field store: the current values of one form's inputs

use super::field::FormField;
use std::collections::BTreeMap;

/// Snapshot of a form's values, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    /// Value of `field`, empty when the form has no such field
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Owned copy of a value, for building request bodies
    pub fn owned(&self, field: &str) -> String {
        self.get(field).to_string()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered container of a form's fields. Performs no validation.
#[derive(Debug, Clone)]
pub struct FieldStore {
    fields: Vec<FormField>,
}

impl FieldStore {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// Overwrite exactly one field. Returns false if no field has that name.
    /// Key handling edits fields in place through the controller instead.
    #[allow(dead_code)]
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == field) {
            Some(f) => {
                f.set_value(value);
                true
            }
            None => {
                tracing::debug!(field, "set on unknown field ignored");
                false
            }
        }
    }

    /// Restore every field to its initial empty value
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    /// Current values, without mutation
    pub fn snapshot(&self) -> FormState {
        self.fields
            .iter()
            .map(|f| (f.name, f.value().to_string()))
            .collect()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_at(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn field_at_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Pairs with `len`
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of required fields, in form order
    pub fn required_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }
}
