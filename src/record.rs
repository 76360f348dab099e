//! Record assembly from an ordered field layout.

use crate::error::Result;
use crate::field::FieldSpec;
use std::collections::HashMap;

/// Width of every record line in an ACH file.
pub const RECORD_SIZE: usize = 94;

/// Ordered sequence of fields making up one record type.
#[derive(Debug, Clone, Copy)]
pub struct RecordLayout {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordLayout {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        RecordLayout { name, fields }
    }

    /// Sum of the field widths.
    pub fn width(&self) -> usize {
        self.fields.iter().map(|f| f.width).sum()
    }

    /// Concatenates the formatted fields in layout order, without separators.
    ///
    /// Fails on the first field that cannot be formatted.
    pub fn assemble(&self, values: &FieldValues) -> Result<String> {
        let mut line = String::with_capacity(RECORD_SIZE);
        for spec in self.fields {
            line.push_str(&spec.format(values.get(spec.name))?);
        }
        Ok(line)
    }
}

/// Values supplied for the variable fields of a record, keyed by field name.
#[derive(Debug, Default, Clone)]
pub struct FieldValues {
    values: HashMap<&'static str, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.values.insert(name, value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}
