use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored ride row, serialized with the table's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Ride {
    #[serde(rename = "rideID")]
    #[sqlx(rename = "rideID")]
    pub ride_id: i64,
    #[serde(rename = "startLat")]
    #[sqlx(rename = "startLat")]
    pub start_lat: f64,
    #[serde(rename = "startLong")]
    #[sqlx(rename = "startLong")]
    pub start_long: f64,
    #[serde(rename = "endLat")]
    #[sqlx(rename = "endLat")]
    pub end_lat: f64,
    #[serde(rename = "endLong")]
    #[sqlx(rename = "endLong")]
    pub end_long: f64,
    #[serde(rename = "riderName")]
    #[sqlx(rename = "riderName")]
    pub rider_name: String,
    #[serde(rename = "driverName")]
    #[sqlx(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "driverVehicle")]
    #[sqlx(rename = "driverVehicle")]
    pub driver_vehicle: String,
    #[serde(with = "sqlite_timestamp")]
    pub created: NaiveDateTime,
}

/// `created` travels in SQLite's `CURRENT_TIMESTAMP` text form.
mod sqlite_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A ride that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn ride() -> Ride {
        Ride {
            ride_id: 7,
            start_lat: 1.0,
            start_long: 2.0,
            end_lat: 3.0,
            end_long: 4.0,
            rider_name: "rider".to_string(),
            driver_name: "driver".to_string(),
            driver_vehicle: "car".to_string(),
            created: NaiveDate::from_ymd_opt(2026, 10, 17)
                .and_then(|d| d.and_hms_opt(12, 0, 5))
                .unwrap(),
        }
    }

    #[test]
    fn serializes_with_column_names_and_sqlite_timestamp() {
        let value = serde_json::to_value(ride()).unwrap();
        assert_eq!(value["rideID"], 7);
        assert_eq!(value["startLong"], 2.0);
        assert_eq!(value["driverVehicle"], "car");
        assert_eq!(value["created"], "2026-10-17 12:00:05");
    }

    #[test]
    fn created_reads_back_from_sqlite_text() {
        let value = json!({
            "rideID": 7,
            "startLat": 1.0,
            "startLong": 2.0,
            "endLat": 3.0,
            "endLong": 4.0,
            "riderName": "rider",
            "driverName": "driver",
            "driverVehicle": "car",
            "created": "2026-10-17 12:00:05"
        });
        let parsed: Ride = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, ride());
    }
}
