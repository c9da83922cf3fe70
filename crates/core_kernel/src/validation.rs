//! Required-field validation
//!
//! Checks a list of labelled values and reports the first one that is missing
//! or blank. Runs before any store access.

/// A labelled input value
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub value: Option<&'a str>,
    pub label: &'a str,
}

impl<'a> Field<'a> {
    pub fn new(value: Option<&'a str>, label: &'a str) -> Self {
        Self { value, label }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some_and(|v| !v.trim().is_empty())
    }
}

/// Returns `"<label> is required."` for the first missing field, or `None`
///
/// ```rust
/// use core_kernel::{validate_fields, Field};
///
/// let message = validate_fields(&[
///     Field::new(Some("a1"), "firstAuthorId"),
///     Field::new(Some(""), "secondAuthorId"),
/// ]);
/// assert_eq!(message.as_deref(), Some("secondAuthorId is required."));
/// ```
pub fn validate_fields(fields: &[Field<'_>]) -> Option<String> {
    fields
        .iter()
        .find(|field| !field.is_present())
        .map(|field| format!("{} is required.", field.label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_present() {
        assert!(validate_fields(&[Field::new(Some("x"), "a"), Field::new(Some("y"), "b")]).is_none());
    }

    #[test]
    fn test_reports_first_missing_only() {
        let message = validate_fields(&[Field::new(None, "a"), Field::new(None, "b")]);
        assert_eq!(message.as_deref(), Some("a is required."));
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let message = validate_fields(&[Field::new(Some(" \t"), "name")]);
        assert_eq!(message.as_deref(), Some("name is required."));
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_fields(&[]).is_none());
    }

    proptest! {
        #[test]
        fn prop_non_blank_values_pass(value in "[a-z0-9]{1,20}") {
            prop_assert!(validate_fields(&[Field::new(Some(&value), "id")]).is_none());
        }
    }
}
