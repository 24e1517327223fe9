// Snapshot domain model: one fetched reading of the gas plant
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// One JSON document from the backend. Every field is optional; a missing
/// field leaves its gauge untouched. Values arrive as JSON numbers or as
/// numeric strings, so parsing is lenient: an unparsable value decodes to
/// NaN and is rejected later by the registry's finiteness check rather
/// than failing the whole snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "lenient_number")]
    pub pressure: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub dew_point: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub vacuo: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rede: Option<f64>,
    /// When this document was received, not part of the wire format.
    #[serde(skip_deserializing, default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            pressure: None,
            dew_point: None,
            vacuo: None,
            rede: None,
            fetched_at: Utc::now(),
        }
    }
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.pressure.is_none()
            && self.dew_point.is_none()
            && self.vacuo.is_none()
            && self.rede.is_none()
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::Null => None,
        serde_json::Value::Number(n) => Some(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Some(s.trim().parse::<f64>().unwrap_or(f64::NAN)),
        _ => Some(f64::NAN),
    })
}
