//! Posto record model and lenient numeric deserialization.
//!
//! The registration form submits every field as a string, so all numeric
//! fields deserialize leniently: a JSON number is taken as-is, a numeric
//! string is parsed, and anything else (missing, empty, null, non-numeric)
//! coerces to 0. Coercion happens once here at the boundary; every engine
//! stage downstream operates on plain totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::PostoId;

/// A service location record, as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posto {
    pub id: PostoId,
    /// Location label ("posto_atendimento" in the source data).
    pub name: String,
    /// Categorical facet, e.g. "Fixo" / "Itinerante".
    pub kind: String,
    /// Categorical facet, municipality or district.
    pub locality: String,
    /// CIN service point designation, free-form.
    #[serde(default)]
    pub cin_point: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub attendants: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub service_hours: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub attendances: i64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_per_business_day: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_per_attendant: f64,
    /// Average handling time (TMA) in minutes.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub handling_minutes: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub estimated_capacity: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub attendances_per_attendant: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub icm_percent: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub idleness_percent: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Posto fields as submitted by the registration form (no id, no timestamp).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostoInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub cin_point: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub attendants: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub service_hours: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub attendances: i64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_per_business_day: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_per_attendant: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub handling_minutes: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub estimated_capacity: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub attendances_per_attendant: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub icm_percent: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub idleness_percent: f64,
}

impl Posto {
    /// Materialize a stored record from form input.
    pub fn from_input(id: PostoId, input: PostoInput, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            name: input.name,
            kind: input.kind,
            locality: input.locality,
            cin_point: input.cin_point,
            attendants: input.attendants,
            service_hours: input.service_hours,
            attendances: input.attendances,
            avg_per_business_day: input.avg_per_business_day,
            avg_per_attendant: input.avg_per_attendant,
            handling_minutes: input.handling_minutes,
            estimated_capacity: input.estimated_capacity,
            attendances_per_attendant: input.attendances_per_attendant,
            icm_percent: input.icm_percent,
            idleness_percent: input.idleness_percent,
            created_at,
        }
    }

    /// Apply form input to an existing record, keeping id and timestamp.
    pub fn apply_input(&mut self, input: PostoInput) {
        let id = self.id;
        let created_at = self.created_at;
        *self = Posto::from_input(id, input, created_at);
    }
}

/// Coerce an arbitrary JSON value to i64, defaulting to 0.
fn coerce_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .or_else(|_| s.parse::<f64>().map(|f| f.round() as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Coerce an arbitrary JSON value to f64, defaulting to 0.0.
fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_i64(&value))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}
