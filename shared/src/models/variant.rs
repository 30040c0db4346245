//! Variant Model

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Variant option: one named axis of product differentiation
/// (e.g. "Size" -> ["M", "L"]).
///
/// A variant set is an ordered `Vec<VariantOption>`; option order determines
/// the naming order of generated combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct VariantOption {
    #[validate(length(min = 1, message = "Option can't be empty"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "At least one value is required"),
        custom(function = non_empty_values)
    )]
    pub values: Vec<String>,
}

impl VariantOption {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

fn non_empty_values(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.is_empty()) {
        let mut err = ValidationError::new("non_empty_values");
        err.message = Some("Value cannot be empty".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_option_name() {
        let option = VariantOption::new("", vec!["M".into()]);
        assert!(option.validate().is_err());
    }

    #[test]
    fn rejects_empty_value_list() {
        let option = VariantOption::new("Size", vec![]);
        assert!(option.validate().is_err());
    }

    #[test]
    fn rejects_blank_value() {
        let option = VariantOption::new("Size", vec!["M".into(), "".into()]);
        assert!(option.validate().is_err());
    }

    #[test]
    fn accepts_named_option_with_values() {
        let option = VariantOption::new("Size", vec!["M".into(), "L".into()]);
        assert!(option.validate().is_ok());
    }
}
