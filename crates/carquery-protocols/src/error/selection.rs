//! Selection errors.

use thiserror::Error;

use crate::selection::SelectionField;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// One or more required fields were unset at build time.
    #[error("Please select {}.", join_labels(.missing))]
    Incomplete { missing: Vec<SelectionField> },

    /// A value outside the options currently offered for a field.
    #[error("'{value}' is not an available {field}")]
    Unavailable { field: SelectionField, value: String },
}

impl SelectionError {
    pub fn missing(&self) -> &[SelectionField] {
        match self {
            Self::Incomplete { missing } => missing,
            Self::Unavailable { .. } => &[],
        }
    }
}

fn join_labels(fields: &[SelectionField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
    match labels.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_single_field() {
        let err = SelectionError::Incomplete {
            missing: vec![SelectionField::Transmission],
        };
        assert_eq!(err.to_string(), "Please select Transmission.");
    }

    #[test]
    fn test_incomplete_many_fields() {
        let err = SelectionError::Incomplete {
            missing: vec![
                SelectionField::Brand,
                SelectionField::Model,
                SelectionField::FuelType,
                SelectionField::Transmission,
            ],
        };
        assert_eq!(
            err.to_string(),
            "Please select Brand, Model, Fuel Type and Transmission."
        );
        assert_eq!(err.missing().len(), 4);
    }

    #[test]
    fn test_unavailable_value() {
        let err = SelectionError::Unavailable {
            field: SelectionField::Model,
            value: "NEXON".to_string(),
        };
        assert_eq!(err.to_string(), "'NEXON' is not an available Model");
        assert!(err.missing().is_empty());
    }
}
