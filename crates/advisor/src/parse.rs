use serde_json::{Map, Value};

use crate::error::ModelResponseError;
use crate::intent::Intent;

/// Keys the model's JSON answer must contain, in schema order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "intent",
    "dataset_id",
    "metric_ids",
    "scenario_id",
    "agent_id",
];

/// The model's structured answer after decoding.
///
/// Required keys are guaranteed to have been present, but their values are
/// taken leniently: an id that is not a string reads as `None`, and a
/// `metric_ids` value that is not an array reads as empty. Reconciliation
/// then falls back to catalog defaults for those.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIntent {
    pub intent: Intent,
    pub dataset_id: Option<String>,
    pub metric_ids: Vec<String>,
    pub scenario_id: Option<String>,
    pub agent_id: Option<String>,
    pub reason: Option<String>,
}

/// Decode sanitized model output into a [`ParsedIntent`].
pub fn parse_intent(text: &str) -> Result<ParsedIntent, ModelResponseError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ModelResponseError::InvalidJson(e.to_string()))?;

    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(ModelResponseError::InvalidJson(format!(
                "expected a JSON object, got {}",
                json_type(&other)
            )));
        }
    };

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|key| !fields.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(ModelResponseError::MissingFields(missing));
    }

    Ok(ParsedIntent {
        intent: Intent::from_label(string_field(&fields, "intent").unwrap_or_default()),
        dataset_id: string_field(&fields, "dataset_id").map(str::to_owned),
        metric_ids: fields
            .get("metric_ids")
            .and_then(Value::as_array)
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default(),
        scenario_id: string_field(&fields, "scenario_id").map(str::to_owned),
        agent_id: string_field(&fields, "agent_id").map(str::to_owned),
        reason: string_field(&fields, "reason").map(str::to_owned),
    })
}

fn string_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
