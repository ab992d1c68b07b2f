use serde::{Deserialize, Deserializer};

/// One `/api/v3/ticker/24hr` entry, reduced to what pair selection
/// needs. A missing, empty, or malformed volume string reads as
/// absent; the selector drops those entries.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerStats {
    pub symbol: String,
    #[serde(
        rename = "quoteVolume",
        default,
        deserialize_with = "deserialize_optional_volume"
    )]
    pub quote_volume: Option<f64>,
}

/// A pair that survived filtering, ready for volume ranking.
#[derive(Debug, Clone)]
pub struct PairCandidate {
    pub symbol: String,
    pub quote_volume: f64,
}

fn deserialize_optional_volume<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => s.parse::<f64>().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    }))
}
