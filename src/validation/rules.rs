//! Declarative field rules for ride creation payloads.
//!
//! Every rule is evaluated against the payload; all violations are reported
//! together in field order.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::NewRide;

/// A field-level validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A JSON number within an inclusive range, in degrees.
#[derive(Debug, Clone, Copy)]
pub struct DegreesRule {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

/// A JSON string with at least one character.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub field: &'static str,
}

const fn latitude(field: &'static str) -> DegreesRule {
    DegreesRule {
        field,
        min: -90.0,
        max: 90.0,
    }
}

const fn longitude(field: &'static str) -> DegreesRule {
    DegreesRule {
        field,
        min: -180.0,
        max: 180.0,
    }
}

pub const START_LAT: DegreesRule = latitude("start_lat");
pub const START_LONG: DegreesRule = longitude("start_long");
pub const END_LAT: DegreesRule = latitude("end_lat");
pub const END_LONG: DegreesRule = longitude("end_long");
pub const RIDER_NAME: TextRule = TextRule { field: "rider_name" };
pub const DRIVER_NAME: TextRule = TextRule { field: "driver_name" };
pub const DRIVER_VEHICLE: TextRule = TextRule { field: "driver_vehicle" };

impl DegreesRule {
    pub fn check(&self, object: &Map<String, Value>) -> Result<f64, FieldError> {
        let bounds = format!("between {} and {} degrees", self.min, self.max);
        match object.get(self.field) {
            None | Some(Value::Null) => Err(FieldError::new(
                self.field,
                format!("{} is required and must be a number {}", self.field, bounds),
            )),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if (self.min..=self.max).contains(&v) => Ok(v),
                _ => Err(FieldError::new(
                    self.field,
                    format!("{} must be {}", self.field, bounds),
                )),
            },
            Some(_) => Err(FieldError::new(
                self.field,
                format!("{} must be a number {}", self.field, bounds),
            )),
        }
    }
}

impl TextRule {
    pub fn check(&self, object: &Map<String, Value>) -> Result<String, FieldError> {
        match object.get(self.field) {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
            _ => Err(FieldError::new(
                self.field,
                format!("{} must be a non empty string", self.field),
            )),
        }
    }
}

/// Validates a ride creation payload and normalizes it into a [`NewRide`].
pub fn validate_ride(payload: &Value) -> Result<NewRide, Vec<FieldError>> {
    let object = payload
        .as_object()
        .ok_or_else(|| vec![FieldError::new("body", "request body must be a JSON object")])?;

    match (
        START_LAT.check(object),
        START_LONG.check(object),
        END_LAT.check(object),
        END_LONG.check(object),
        RIDER_NAME.check(object),
        DRIVER_NAME.check(object),
        DRIVER_VEHICLE.check(object),
    ) {
        (
            Ok(start_lat),
            Ok(start_long),
            Ok(end_lat),
            Ok(end_long),
            Ok(rider_name),
            Ok(driver_name),
            Ok(driver_vehicle),
        ) => Ok(NewRide {
            start_lat,
            start_long,
            end_lat,
            end_long,
            rider_name,
            driver_name,
            driver_vehicle,
        }),
        (start_lat, start_long, end_lat, end_long, rider_name, driver_name, driver_vehicle) => {
            Err([
                start_lat.err(),
                start_long.err(),
                end_lat.err(),
                end_long.err(),
                rider_name.err(),
                driver_name.err(),
                driver_vehicle.err(),
            ]
            .into_iter()
            .flatten()
            .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "start_lat": 0,
            "start_long": 0,
            "end_lat": 0,
            "end_long": 0,
            "rider_name": "rider1",
            "driver_name": "driver1",
            "driver_vehicle": "v1"
        })
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn accepts_well_formed_payload() {
        let ride = validate_ride(&valid_payload()).unwrap();
        assert_eq!(ride.start_lat, 0.0);
        assert_eq!(ride.rider_name, "rider1");
        assert_eq!(ride.driver_vehicle, "v1");
    }

    #[test]
    fn accepts_boundary_coordinates() {
        let mut payload = valid_payload();
        payload["start_lat"] = json!(-90);
        payload["end_lat"] = json!(90.0);
        payload["start_long"] = json!(-180);
        payload["end_long"] = json!(180);
        let ride = validate_ride(&payload).unwrap();
        assert_eq!(ride.start_lat, -90.0);
        assert_eq!(ride.end_long, 180.0);
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        let mut payload = valid_payload();
        payload["start_lat"] = json!(91);
        let errors = validate_ride(&payload).unwrap_err();
        assert_eq!(fields(&errors), vec!["start_lat"]);
        assert!(errors[0].message.contains("between -90 and 90"));
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        let mut payload = valid_payload();
        payload["end_long"] = json!(-180.5);
        let errors = validate_ride(&payload).unwrap_err();
        assert_eq!(fields(&errors), vec!["end_long"]);
        assert!(errors[0].message.contains("between -180 and 180"));
    }

    #[test]
    fn rejects_numeric_strings() {
        let mut payload = valid_payload();
        payload["start_long"] = json!("12");
        let errors = validate_ride(&payload).unwrap_err();
        assert_eq!(fields(&errors), vec!["start_long"]);
    }

    #[test]
    fn collects_every_violation_in_rule_order() {
        let payload = json!({
            "start_lat": 100,
            "end_long": 500,
            "rider_name": "",
            "driver_name": 7,
            "driver_vehicle": "car"
        });
        let errors = validate_ride(&payload).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["start_lat", "start_long", "end_lat", "end_long", "rider_name", "driver_name"]
        );
        assert!(errors[1].message.contains("required"));
    }

    #[test]
    fn rules_yield_normalized_values() {
        let payload = valid_payload();
        let object = payload.as_object().unwrap();
        assert_eq!(START_LAT.check(object), Ok(0.0));
        assert_eq!(END_LONG.check(object), Ok(0.0));
        assert_eq!(DRIVER_NAME.check(object), Ok("driver1".to_string()));
    }

    #[test]
    fn rejects_non_object_body() {
        let errors = validate_ride(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(fields(&errors), vec!["body"]);
    }

    #[test]
    fn names_are_passed_through_untrimmed() {
        let mut payload = valid_payload();
        payload["rider_name"] = json!("  spaced  ");
        let ride = validate_ride(&payload).unwrap();
        assert_eq!(ride.rider_name, "  spaced  ");
    }
}
