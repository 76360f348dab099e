//! Fixed-width field formatting.
//!
//! A [`FieldSpec`] describes one slot of a 94-character record: its width,
//! which side is padded, the fill character, and whether the slot is a
//! constant or must be supplied by the caller.

use crate::error::{AchError, Result};

/// Side on which a value is padded to reach the field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Pad on the left, right-justifying the value.
    Left,
    /// Pad on the right, left-justifying the value.
    Right,
}

/// Layout description of a single fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: usize,
    pub padding: Padding,
    pub fill: char,
    pub mandatory: bool,
    /// Fixed content; when set the supplied value is always ignored.
    pub constant: Option<&'static str>,
}

impl FieldSpec {
    /// A mandatory field the caller must supply.
    pub const fn required(name: &'static str, width: usize, padding: Padding, fill: char) -> Self {
        FieldSpec {
            name,
            width,
            padding,
            fill,
            mandatory: true,
            constant: None,
        }
    }

    /// A field that may be left empty; it is then rendered as pure fill.
    pub const fn optional(name: &'static str, width: usize, padding: Padding, fill: char) -> Self {
        FieldSpec {
            name,
            width,
            padding,
            fill,
            mandatory: false,
            constant: None,
        }
    }

    /// A field whose content is fixed by the record format.
    pub const fn constant(
        name: &'static str,
        width: usize,
        padding: Padding,
        fill: char,
        value: &'static str,
    ) -> Self {
        FieldSpec {
            name,
            width,
            padding,
            fill,
            mandatory: true,
            constant: Some(value),
        }
    }

    /// Renders `value` to exactly `width` upper-cased characters.
    ///
    /// Values longer than the field are truncated silently, keeping the
    /// leftmost characters. A blank value on a mandatory, non-constant field
    /// fails with [`AchError::MissingMandatoryField`]; a value containing
    /// non-ASCII characters fails with [`AchError::NonAsciiValue`].
    pub fn format(&self, value: Option<&str>) -> Result<String> {
        let raw = match self.constant {
            Some(constant) => constant,
            None => match value {
                Some(v) if !v.trim().is_empty() => v,
                _ if self.mandatory => {
                    return Err(AchError::MissingMandatoryField(self.name.to_string()))
                }
                _ => "",
            },
        };

        if !raw.is_ascii() {
            return Err(AchError::NonAsciiValue {
                field: self.name.to_string(),
                value: raw.to_string(),
            });
        }

        let upper = raw.to_ascii_uppercase();
        let truncated: String = upper.chars().take(self.width).collect();
        let fill: String = std::iter::repeat(self.fill.to_ascii_uppercase())
            .take(self.width - truncated.chars().count())
            .collect();

        Ok(match self.padding {
            Padding::Left => fill + &truncated,
            Padding::Right => truncated + &fill,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_ignores_supplied_value() {
        let spec = FieldSpec::constant("Priority Code", 2, Padding::Left, ' ', "01");
        assert_eq!(spec.format(Some("99")).unwrap(), "01");
        assert_eq!(spec.format(None).unwrap(), "01");
    }

    #[test]
    fn test_constant_is_padded_to_width() {
        let spec = FieldSpec::constant("Batch Count", 6, Padding::Left, '0', "1");
        assert_eq!(spec.format(None).unwrap(), "000001");

        let blank = FieldSpec::constant("Reserved", 39, Padding::Right, ' ', "");
        assert_eq!(blank.format(Some("ignored")).unwrap(), " ".repeat(39));
    }

    #[test]
    fn test_left_padding_right_justifies() {
        let spec = FieldSpec::required("Amount", 10, Padding::Left, '0');
        assert_eq!(spec.format(Some("3521")).unwrap(), "0000003521");
    }

    #[test]
    fn test_right_padding_left_justifies() {
        let spec = FieldSpec::required("Receiver Name", 8, Padding::Right, ' ');
        assert_eq!(spec.format(Some("abc")).unwrap(), "ABC     ");
    }

    #[test]
    fn test_long_values_are_truncated() {
        let spec = FieldSpec::required("Company Name", 5, Padding::Right, ' ');
        assert_eq!(spec.format(Some("Acme Corporation")).unwrap(), "ACME ");
    }

    #[test]
    fn test_output_is_upper_cased() {
        let spec = FieldSpec::required("Entry Description", 10, Padding::Right, ' ');
        assert_eq!(spec.format(Some("vendor")).unwrap(), "VENDOR    ");
    }

    #[test]
    fn test_missing_mandatory_value_fails() {
        let spec = FieldSpec::required("Receiver Account Number", 17, Padding::Right, ' ');
        for value in [None, Some(""), Some("   ")] {
            match spec.format(value) {
                Err(AchError::MissingMandatoryField(name)) => {
                    assert_eq!(name, "Receiver Account Number")
                }
                other => panic!("Expected MissingMandatoryField, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_ascii_value_fails() {
        let spec = FieldSpec::required("Receiver Name", 22, Padding::Right, ' ');
        match spec.format(Some("José Müller")) {
            Err(AchError::NonAsciiValue { field, value }) => {
                assert_eq!(field, "Receiver Name");
                assert_eq!(value, "José Müller");
            }
            other => panic!("Expected NonAsciiValue, got {:?}", other),
        }
    }

    #[test]
    fn test_optional_blank_is_fill() {
        let spec = FieldSpec::optional("Reference Code", 8, Padding::Right, ' ');
        assert_eq!(spec.format(None).unwrap(), "        ");
        assert_eq!(spec.format(Some("")).unwrap(), "        ");
    }
}
