use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lightweight catalog entry shown in listings.
///
/// Field names follow the catalog API (`detailPath`, `type`). Missing strings
/// decode as empty rather than failing the whole page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub genre: String,
    /// Opaque key for the detail lookup
    #[serde(default)]
    pub detail_path: String,
}

/// Rating as served by the API: sometimes a number, sometimes text like "8.1" or "N/A"
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Rating {
    Score(f64),
    Text(String),
}

impl Default for Rating {
    fn default() -> Self {
        Rating::Text(String::new())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Rating::Score)
                .unwrap_or_else(|| Rating::Text(n.to_string())),
            serde_json::Value::String(s) => Rating::Text(s),
            serde_json::Value::Null => Rating::default(),
            other => Rating::Text(other.to_string()),
        })
    }
}

impl Rating {
    /// Numeric value when the rating is a number or a parseable string
    pub fn score(&self) -> Option<f64> {
        match self {
            Rating::Score(value) => Some(*value),
            Rating::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Score(value) => write!(f, "{}", value),
            Rating::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
            MediaKind::Unknown => "unknown",
        }
    }

    pub fn is_series(&self) -> bool {
        matches!(self, MediaKind::Tv)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `"123"`, `123` or `null` for identifier-like fields
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
