//! Wire DTOs for the co-pilot backend.
//!
//! DESIGN
//! ======
//! The backend is loosely typed (MySQL rows serialized by Flask), so decoding
//! is lenient: absent or `null` collections become empty, numeric columns
//! accept numbers or numeric strings, and anything unusable becomes a gap
//! rather than a decode failure for the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Combined dashboard payload from `GET /api/data`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub equipment: Vec<EquipmentRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub production: Vec<ProductionRecord>,
    /// Opaque carbon summary, displayed without interpretation.
    #[serde(default, deserialize_with = "object_or_empty")]
    pub carbon_footprint: Map<String, Value>,
}

/// One piece of mining equipment.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct EquipmentRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Fuel burn in litres per hour.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fuel_efficiency: Option<f64>,
    /// Backend-defined columns not used by the client.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One day of ore production.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProductionRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ore_extracted_tons: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub target_tons: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Alert urgency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Parse the backend's severity string. Anything unrecognized is `Low`.
    #[must_use]
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("high") => Self::High,
            Some("medium") => Self::Medium,
            _ => Self::Low,
        }
    }

    /// CSS class used to style an alert of this severity.
    #[must_use]
    pub fn style_class(self) -> &'static str {
        match self {
            Self::High => "alert-high",
            Self::Medium => "alert-medium",
            Self::Low => "alert-low",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A maintenance alert computed by the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Alert {
    #[serde(default, deserialize_with = "lenient_string")]
    pub equipment_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(default, deserialize_with = "severity_from_wire")]
    pub severity: Severity,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub days_until: Option<i64>,
}

impl Alert {
    /// Human-readable due date, if the alert carries one.
    #[must_use]
    pub fn due_label(&self) -> Option<String> {
        let days = self.days_until?;
        Some(match days {
            0 => "due today".to_owned(),
            1 => "due in 1 day".to_owned(),
            -1 => "overdue by 1 day".to_owned(),
            d if d < 0 => format!("overdue by {} days", d.unsigned_abs()),
            d => format!("due in {d} days"),
        })
    }
}

/// `GET /api/alerts` response body.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct AlertsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub alerts: Vec<Alert>,
}

/// `POST /api/query` request body.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, Serialize)]
pub(crate) struct QueryRequest<'a> {
    pub query: &'a str,
}

/// `POST /api/query` response body. Extra fields (`query_type`, `timestamp`) are ignored.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// An answer from the co-pilot.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryAnswer {
    pub text: String,
    /// Structured payload attached to the answer (tables, series, etc.).
    pub data: Option<Value>,
}

/// `GET /api/health` response body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HealthStatus {
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub service: String,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Extract a finite number from a JSON number or numeric string.
#[must_use]
pub fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number_from_value(&Value::deserialize(deserializer)?))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(int) = value.as_i64() {
        return Ok(Some(int));
    }
    #[allow(clippy::cast_possible_truncation)]
    let whole = number_from_value(&value)
        .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
        .map(|f| f as i64);
    Ok(whole)
}

fn severity_from_wire<'de, D>(deserializer: D) -> Result<Severity, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Severity::from_wire(value.as_str()))
}
