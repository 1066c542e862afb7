use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: Value,
}

/// Body of a 422 response, one entry per field that failed to validate.
#[derive(Debug, Serialize)]
pub struct ValidationErrors {
    pub detail: Vec<ValidationError>,
}

#[derive(Debug, Serialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<Value>,
    pub msg: &'static str,
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}
