use crate::shared::error::TelemetryError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One immutable, validated telemetry record from a device.
///
/// `brand` is the only required field. The hardware/software sections are
/// opaque JSON values: the service validates presence only and passes their
/// internals through unmodified, so producers are free to evolve what they
/// report without a schema change here.
///
/// `created_at` is always server-assigned at construction time. A
/// producer-supplied `createdAt` in the payload is ignored so that an
/// untrusted device cannot spoof ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphics_card: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bluetooth: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl Snapshot {
    /// Constructs a Snapshot from an untrusted payload.
    ///
    /// # Errors
    /// Returns `TelemetryError::Validation` if:
    /// - The payload is not a JSON object
    /// - `brand` is missing, not a string, or empty/whitespace-only
    ///
    /// No other field is type-checked; unknown fields are dropped.
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let object = payload
            .as_object()
            .ok_or_else(|| TelemetryError::validation("payload must be a JSON object"))?;

        let brand = Self::validate_brand(object)?;

        let field = |name: &str| object.get(name).cloned();

        Ok(Self {
            brand,
            graphics_card: field("graphicsCard"),
            ram: field("ram"),
            cpu: field("cpu"),
            network: field("network"),
            bluetooth: field("bluetooth"),
            os: field("os"),
            battery: field("battery"),
            created_at: Utc::now(),
        })
    }

    fn validate_brand(object: &Map<String, Value>) -> Result<String> {
        match object.get("brand") {
            Some(Value::String(brand)) if !brand.trim().is_empty() => Ok(brand.clone()),
            Some(Value::String(_)) => {
                Err(TelemetryError::validation("brand must not be empty").into())
            }
            Some(_) => Err(TelemetryError::validation("brand must be a string").into()),
            None => Err(TelemetryError::validation("brand is required").into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_validation_error(result: Result<Snapshot>, expected: &str) {
        let error = result.unwrap_err();
        match error.downcast_ref::<TelemetryError>() {
            Some(TelemetryError::Validation { message }) => {
                assert!(
                    message.contains(expected),
                    "expected '{}' in '{}'",
                    expected,
                    message
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_payload_minimal() {
        let snapshot = Snapshot::from_payload(&json!({ "brand": "Dell" })).unwrap();
        assert_eq!(snapshot.brand, "Dell");
        assert!(snapshot.cpu.is_none());
        assert!(snapshot.battery.is_none());
    }

    #[test]
    fn test_from_payload_passes_sections_through_opaquely() {
        let payload = json!({
            "brand": "Lenovo",
            "cpu": { "model": "i7", "cores": 8 },
            "ram": { "totalMb": 16384, "modules": [{ "slot": 0 }, { "slot": 1 }] },
            "battery": "87%"
        });
        let snapshot = Snapshot::from_payload(&payload).unwrap();
        assert_eq!(snapshot.cpu, Some(json!({ "model": "i7", "cores": 8 })));
        assert_eq!(
            snapshot.ram,
            Some(json!({ "totalMb": 16384, "modules": [{ "slot": 0 }, { "slot": 1 }] }))
        );
        // Non-object section values are stored as-is, not rejected
        assert_eq!(snapshot.battery, Some(json!("87%")));
    }

    #[test]
    fn test_from_payload_missing_brand() {
        assert_validation_error(
            Snapshot::from_payload(&json!({ "graphicsCard": "RTX 3080" })),
            "brand is required",
        );
    }

    #[test]
    fn test_from_payload_empty_brand() {
        assert_validation_error(
            Snapshot::from_payload(&json!({ "brand": "" })),
            "brand must not be empty",
        );
    }

    #[test]
    fn test_from_payload_whitespace_brand() {
        assert_validation_error(
            Snapshot::from_payload(&json!({ "brand": "   " })),
            "brand must not be empty",
        );
    }

    #[test]
    fn test_from_payload_non_string_brand() {
        assert_validation_error(
            Snapshot::from_payload(&json!({ "brand": 42 })),
            "brand must be a string",
        );
    }

    #[test]
    fn test_from_payload_non_object() {
        assert_validation_error(
            Snapshot::from_payload(&json!(["brand", "Dell"])),
            "must be a JSON object",
        );
    }

    #[test]
    fn test_from_payload_drops_unknown_fields() {
        let payload = json!({ "brand": "HP", "keyboard": "AZERTY" });
        let snapshot = Snapshot::from_payload(&payload).unwrap();
        let serialized = serde_json::to_value(&snapshot).unwrap();
        assert!(serialized.get("keyboard").is_none());
    }

    #[test]
    fn test_created_at_is_server_assigned() {
        let payload = json!({ "brand": "Asus", "createdAt": "1999-01-01T00:00:00Z" });
        let snapshot = Snapshot::from_payload(&payload).unwrap();
        assert!(snapshot.created_at.timestamp() > 946_684_800); // past year 2000
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let payload = json!({ "brand": "Dell", "graphicsCard": { "vendor": "NVIDIA" } });
        let snapshot = Snapshot::from_payload(&payload).unwrap();
        let serialized = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(serialized["graphicsCard"], json!({ "vendor": "NVIDIA" }));
        assert!(serialized.get("createdAt").is_some());
        // Absent sections are omitted entirely, matching the stored format
        assert!(serialized.get("cpu").is_none());
    }

    #[test]
    fn test_round_trips_through_json() {
        let payload = json!({ "brand": "Dell", "cpu": { "model": "i7" } });
        let snapshot = Snapshot::from_payload(&payload).unwrap();
        let serialized = serde_json::to_string(&snapshot).unwrap();
        let restored: Snapshot = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored, snapshot);
    }
}
