use serde::Serialize;

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: must not be empty")]
    Blank { field: String },

    #[error("{field}: invalid email address")]
    InvalidEmail { field: String },

    #[error("{field}: at least one delivery day is required")]
    NoDeliveryDays { field: String },

    #[error("{field}: this service accepts at most {max} delivery days per order, got {count}")]
    TooManyDeliveryDays { field: String, max: usize, count: usize },

    #[error("{field}: date is required")]
    MissingDate { field: String },

    #[error("{field}: '{value}' is not a valid calendar date (expected YYYY-MM-DD)")]
    InvalidDate { field: String, value: String },

    #[error("{field}: number of people must be a whole number")]
    PeopleNotAnInteger { field: String },

    #[error("{field}: number of people must be between {min} and {max}, got {value}")]
    PeopleOutOfRange { field: String, value: i64, min: u32, max: u32 },

    #[error("{field}: select at least one dish for this day")]
    NoItemsSelected { field: String },

    #[error("{field}: unknown menu item '{item_id}'")]
    UnknownItem { field: String, item_id: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Blank { field }
            | ValidationError::InvalidEmail { field }
            | ValidationError::NoDeliveryDays { field }
            | ValidationError::TooManyDeliveryDays { field, .. }
            | ValidationError::MissingDate { field }
            | ValidationError::InvalidDate { field, .. }
            | ValidationError::PeopleNotAnInteger { field }
            | ValidationError::PeopleOutOfRange { field, .. }
            | ValidationError::NoItemsSelected { field }
            | ValidationError::UnknownItem { field, .. } => field,
        }
    }

    /// Stable, low-cardinality name of the violated rule.
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::Blank { .. } => "blank",
            ValidationError::InvalidEmail { .. } => "invalid_email",
            ValidationError::NoDeliveryDays { .. } => "no_delivery_days",
            ValidationError::TooManyDeliveryDays { .. } => "too_many_delivery_days",
            ValidationError::MissingDate { .. } => "missing_date",
            ValidationError::InvalidDate { .. } => "invalid_date",
            ValidationError::PeopleNotAnInteger { .. } => "people_not_an_integer",
            ValidationError::PeopleOutOfRange { .. } => "people_out_of_range",
            ValidationError::NoItemsSelected { .. } => "no_items_selected",
            ValidationError::UnknownItem { .. } => "unknown_item",
        }
    }

    /// Human readable reason without the field prefix.
    pub fn reason(&self) -> String {
        let full = self.to_string();
        let prefix = format!("{}: ", self.field());
        full.strip_prefix(&prefix).map(str::to_string).unwrap_or(full)
    }

    pub fn to_field_error(&self) -> FieldError {
        FieldError {
            field: self.field().to_string(),
            reason: self.reason(),
        }
    }
}

/// Wire shape of a single violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

/// Every violation found in one candidate order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("order validation failed with {} error(s)", .0.len())]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn field_errors(&self) -> Vec<FieldError> {
        self.0.iter().map(ValidationError::to_field_error).collect()
    }

    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strips_field_prefix() {
        let err = ValidationError::PeopleOutOfRange {
            field: "deliveryDays[0].numberOfPeople".to_string(),
            value: 501,
            min: 1,
            max: 500,
        };

        assert_eq!(err.field(), "deliveryDays[0].numberOfPeople");
        assert_eq!(err.reason(), "number of people must be between 1 and 500, got 501");
    }

    #[test]
    fn test_unknown_item_is_distinct() {
        let err = ValidationError::UnknownItem {
            field: "deliveryDays[1].selectedItems[0].id".to_string(),
            item_id: "main-lobster".to_string(),
        };

        assert_eq!(err.reason(), "unknown menu item 'main-lobster'");
        assert_ne!(
            err,
            ValidationError::NoItemsSelected { field: err.field().to_string() }
        );
    }

    #[test]
    fn test_delivery_day_limit_reason_names_the_limit() {
        let err = ValidationError::TooManyDeliveryDays {
            field: "deliveryDays".to_string(),
            max: 7,
            count: 9,
        };

        assert_eq!(err.reason(), "this service accepts at most 7 delivery days per order, got 9");
        assert_eq!(err.rule(), "too_many_delivery_days");
    }

    #[test]
    fn test_validation_errors_display() {
        let errors = ValidationErrors(vec![
            ValidationError::Blank { field: "customerName".to_string() },
            ValidationError::InvalidEmail { field: "customerEmail".to_string() },
        ]);

        assert_eq!(errors.to_string(), "order validation failed with 2 error(s)");
        assert!(errors.has_field("customerEmail"));
        assert_eq!(errors.field_errors()[0].reason, "must not be empty");
    }
}
