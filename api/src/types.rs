//! Wire types exchanged with the analysis service.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnalysisRequest<'a> {
    pub text: &'a str,
}

/// Scores returned for a single submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub toxicity: f64,
    pub gibberish: GibberishScore,
}

/// One persisted analysis as listed by `GET /history`.
///
/// Field order here is the export order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRecord {
    pub text: String,
    #[serde(deserialize_with = "lenient_number")]
    pub toxicity: f64,
    pub gibberish: GibberishScore,
    pub timestamp: RecordTimestamp,
}

/// The gibberish score arrives either as a bare number or as a labeled string
/// such as `"clean : 0.987"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GibberishScore {
    Numeric(f64),
    Labeled(String),
}

impl GibberishScore {
    /// Text as the service sent it, for tables and result cards.
    pub fn display_text(&self) -> String {
        match self {
            Self::Numeric(value) => value.to_string(),
            Self::Labeled(text) => text.clone(),
        }
    }
}

impl From<f64> for GibberishScore {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for GibberishScore {
    fn from(value: &str) -> Self {
        Self::Labeled(value.to_owned())
    }
}

/// Creation instant set by the service: ISO-8601 text or an epoch number.
///
/// Epoch numbers may be integral or fractional, in seconds or milliseconds;
/// see [`RecordTimestamp::epoch_millis`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RecordTimestamp {
    Epoch(i64),
    EpochFractional(f64),
    Iso(String),
}

/// Epoch magnitudes below this are seconds (it is 1973 in milliseconds and
/// year 5138 in seconds).
const EPOCH_SECONDS_LIMIT: f64 = 1e11;

impl RecordTimestamp {
    /// Milliseconds since the Unix epoch for the numeric forms, `None` for
    /// text or non-finite numbers.
    pub fn epoch_millis(&self) -> Option<f64> {
        let value = match self {
            Self::Epoch(value) => *value as f64,
            Self::EpochFractional(value) if value.is_finite() => *value,
            Self::EpochFractional(_) | Self::Iso(_) => return None,
        };
        if value.abs() < EPOCH_SECONDS_LIMIT {
            Some(value * 1000.0)
        } else {
            Some(value)
        }
    }

    /// The value as the service sent it.
    pub fn raw_text(&self) -> String {
        match self {
            Self::Epoch(value) => value.to_string(),
            Self::EpochFractional(value) => value.to_string(),
            Self::Iso(raw) => raw.clone(),
        }
    }
}

impl From<&str> for RecordTimestamp {
    fn from(value: &str) -> Self {
        Self::Iso(value.to_owned())
    }
}

/// Accepts `0.12` as well as `"0.12"`; the service marshals some responses with
/// string fields.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("expected a numeric score, got `{text}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn history_record_from_service_payload() {
        let record: AnalysisRecord = serde_json::from_value(json!({
            "text": "hello world",
            "toxicity": 0.12,
            "gibberish": "clean : 0.870",
            "timestamp": "2024-05-01T10:00:00.123456"
        }))
        .unwrap();

        assert_eq!(record.toxicity, 0.12);
        assert_eq!(record.gibberish, GibberishScore::Labeled("clean : 0.870".into()));
        assert_eq!(
            record.timestamp,
            RecordTimestamp::Iso("2024-05-01T10:00:00.123456".into())
        );
    }

    #[test]
    fn analyze_response_with_string_fields() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "text": "hello",
            "toxicity": "0.004",
            "gibberish": 0.5
        }))
        .unwrap();

        assert_eq!(result.toxicity, 0.004);
        assert_eq!(result.gibberish, GibberishScore::Numeric(0.5));
    }

    #[test]
    fn non_numeric_toxicity_is_rejected() {
        let err = serde_json::from_value::<AnalysisResult>(json!({
            "toxicity": "very",
            "gibberish": 0.5
        }))
        .unwrap_err();
        assert!(err.to_string().contains("numeric score"));
    }

    #[test]
    fn epoch_timestamps_are_accepted() {
        let record: AnalysisRecord = serde_json::from_value(json!({
            "text": "t",
            "toxicity": 0,
            "gibberish": 1,
            "timestamp": 1_714_557_600_000_i64
        }))
        .unwrap();
        assert_eq!(record.timestamp, RecordTimestamp::Epoch(1_714_557_600_000));
    }

    #[test]
    fn history_with_mixed_timestamp_shapes_decodes() {
        let records: Vec<AnalysisRecord> = serde_json::from_str(
            r#"[
                {"text":"a","toxicity":0.1,"gibberish":"clean : 0.9","timestamp":"2024-05-01T10:00:00"},
                {"text":"b","toxicity":0.2,"gibberish":0.4,"timestamp":1714557600.25}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp, RecordTimestamp::Iso("2024-05-01T10:00:00".into()));
        assert_eq!(records[1].timestamp, RecordTimestamp::EpochFractional(1_714_557_600.25));
    }

    #[test]
    fn epoch_unit_is_inferred_from_magnitude() {
        assert_eq!(
            RecordTimestamp::EpochFractional(1_714_557_600.25).epoch_millis(),
            Some(1_714_557_600_250.0)
        );
        assert_eq!(
            RecordTimestamp::Epoch(1_714_557_600).epoch_millis(),
            Some(1_714_557_600_000.0)
        );
        assert_eq!(
            RecordTimestamp::Epoch(1_714_557_600_000).epoch_millis(),
            Some(1_714_557_600_000.0)
        );
        assert_eq!(RecordTimestamp::EpochFractional(f64::NAN).epoch_millis(), None);
        assert_eq!(RecordTimestamp::from("2024-05-01").epoch_millis(), None);
    }

    #[test]
    fn fractional_epoch_round_trips() {
        let ts = RecordTimestamp::EpochFractional(1_714_557_600.25);
        let encoded = serde_json::to_string(&ts).unwrap();
        assert_eq!(encoded, "1714557600.25");
        assert_eq!(serde_json::from_str::<RecordTimestamp>(&encoded).unwrap(), ts);
        assert_eq!(ts.raw_text(), "1714557600.25");
    }

    #[test]
    fn serialization_keeps_field_order_and_variant_shape() {
        let record = AnalysisRecord {
            text: "a".into(),
            toxicity: 0.5,
            gibberish: "noise : 0.9".into(),
            timestamp: "2024-01-01T00:00:00".into(),
        };
        let encoded = serde_json::to_string(&record).unwrap();
        assert_eq!(
            encoded,
            r#"{"text":"a","toxicity":0.5,"gibberish":"noise : 0.9","timestamp":"2024-01-01T00:00:00"}"#
        );
    }
}
