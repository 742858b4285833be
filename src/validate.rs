// =============================================================================
// Input Validator — presence check for the six required fields
// =============================================================================
//
// The pipeline accepts a raw JSON mapping from the outside world. Before any
// arithmetic runs, this stage confirms that every required field is present,
// in a fixed check order, and reports the first one that is missing.
//
// Presence only: value ranges are not checked here (negative revenue is a
// valid input; the calculator's zero-guards handle degenerate denominators).
// =============================================================================

use serde_json::Value;
use tracing::debug;

use crate::types::DailyInput;

/// Required field names, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "daily_revenue",
    "daily_cost",
    "number_of_customers",
    "previous_day_revenue",
    "previous_day_cost",
    "previous_day_customers",
];

/// Why an input record was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The payload was not a JSON object, or a present field was not numeric.
    #[error("invalid input payload: {0}")]
    InvalidPayload(String),
}

/// Validate a raw JSON mapping and convert it into a `DailyInput`.
///
/// Fails with `MissingField` naming the first absent field in
/// `REQUIRED_FIELDS` order; a present-but-non-numeric value fails the
/// subsequent typed conversion with `InvalidPayload`.
pub fn validate(raw: &Value) -> Result<DailyInput, ValidationError> {
    let map = raw
        .as_object()
        .ok_or_else(|| ValidationError::InvalidPayload("expected a JSON object".to_string()))?;

    for field in REQUIRED_FIELDS {
        if !map.contains_key(field) {
            return Err(ValidationError::MissingField(field));
        }
    }

    let input: DailyInput = serde_json::from_value(raw.clone())
        .map_err(|e| ValidationError::InvalidPayload(e.to_string()))?;

    debug!("input record validated");
    Ok(input)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        json!({
            "daily_revenue": 5000,
            "daily_cost": 3000,
            "number_of_customers": 50,
            "previous_day_revenue": 4500,
            "previous_day_cost": 2500,
            "previous_day_customers": 45
        })
    }

    #[test]
    fn accepts_complete_record() {
        let input = validate(&full_record()).unwrap();
        assert!((input.daily_revenue - 5000.0).abs() < f64::EPSILON);
        assert!((input.previous_day_customers - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reports_first_missing_field_in_check_order() {
        // Remove two fields; the error must name the one earlier in the
        // fixed check order, not the later one.
        let mut raw = full_record();
        let map = raw.as_object_mut().unwrap();
        map.remove("daily_cost");
        map.remove("previous_day_cost");

        match validate(&raw) {
            Err(ValidationError::MissingField(name)) => assert_eq!(name, "daily_cost"),
            other => panic!("expected MissingField(daily_cost), got {other:?}"),
        }
    }

    #[test]
    fn each_missing_field_is_detected() {
        for field in REQUIRED_FIELDS {
            let mut raw = full_record();
            raw.as_object_mut().unwrap().remove(field);
            match validate(&raw) {
                Err(ValidationError::MissingField(name)) => assert_eq!(name, field),
                other => panic!("expected MissingField({field}), got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(matches!(
            validate(&json!([1, 2, 3])),
            Err(ValidationError::InvalidPayload(_))
        ));
        assert!(matches!(
            validate(&json!("nope")),
            Err(ValidationError::InvalidPayload(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_value() {
        let mut raw = full_record();
        raw["daily_revenue"] = json!("5000");
        assert!(matches!(
            validate(&raw),
            Err(ValidationError::InvalidPayload(_))
        ));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let mut raw = full_record();
        raw.as_object_mut()
            .unwrap()
            .insert("notes".to_string(), json!("end of quarter"));
        assert!(validate(&raw).is_ok());
    }
}
