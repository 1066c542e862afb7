use super::types::{ValidationError, ValidationErrors};
use crate::predictor::Dialog;
use axum::{
    Json, async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use tracing::debug;

/// JSON body extractor for `/predict`.
///
/// Only checks that both fields are present and are arrays. Anything else is
/// rejected with 422 before the handler runs. A body without a content type
/// is read as JSON.
#[derive(Debug)]
pub struct DialogInput(pub Dialog);

#[async_trait]
impl<S> FromRequest<S> for DialogInput
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| value.to_str().unwrap_or_default().to_owned());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match parse_body(content_type.as_deref(), &bytes) {
            Ok(dialog) => Ok(Self(dialog)),
            Err(errors) => {
                debug!("Rejecting dialog with {} validation errors", errors.detail.len());
                Err(errors.into_response())
            }
        }
    }
}

/// Decodes a raw request body into a dialog.
///
/// The body is parsed as JSON when the content type is absent or is a JSON
/// type; any other content type is validated as an opaque string.
pub fn parse_body(content_type: Option<&str>, bytes: &[u8]) -> Result<Dialog, ValidationErrors> {
    if bytes.is_empty() {
        return Err(ValidationErrors::single(ValidationError {
            kind: "missing",
            loc: vec![json!("body")],
            msg: "Field required",
            input: Value::Null,
            ctx: None,
        }));
    }

    if !content_type.is_none_or(is_json_content_type) {
        let raw = String::from_utf8_lossy(bytes).into_owned();
        return Err(ValidationErrors::not_an_object(Value::String(raw)));
    }

    let body: Value = serde_json::from_slice(bytes).map_err(|e| {
        debug!("Rejecting malformed JSON body: {}", e);
        ValidationErrors::json_invalid(e.to_string())
    })?;
    validate(&body)
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

pub fn validate(body: &Value) -> Result<Dialog, ValidationErrors> {
    let Value::Object(fields) = body else {
        return Err(ValidationErrors::not_an_object(body.clone()));
    };

    let mut detail = Vec::new();
    let utterances = list_field(fields, body, "utterances", &mut detail);
    let annotation_target_pair = list_field(fields, body, "annotation_target_pair", &mut detail);

    match (utterances, annotation_target_pair) {
        (Some(utterances), Some(annotation_target_pair)) => Ok(Dialog {
            utterances,
            annotation_target_pair,
        }),
        _ => Err(ValidationErrors { detail }),
    }
}

fn list_field(
    fields: &Map<String, Value>,
    body: &Value,
    name: &'static str,
    detail: &mut Vec<ValidationError>,
) -> Option<Vec<Value>> {
    match fields.get(name) {
        Some(Value::Array(items)) => Some(items.clone()),
        Some(other) => {
            detail.push(ValidationError {
                kind: "list_type",
                loc: vec![json!("body"), json!(name)],
                msg: "Input should be a valid list",
                input: other.clone(),
                ctx: None,
            });
            None
        }
        None => {
            detail.push(ValidationError {
                kind: "missing",
                loc: vec![json!("body"), json!(name)],
                msg: "Field required",
                input: body.clone(),
                ctx: None,
            });
            None
        }
    }
}

impl ValidationErrors {
    fn single(error: ValidationError) -> Self {
        Self {
            detail: vec![error],
        }
    }

    fn not_an_object(input: Value) -> Self {
        Self::single(ValidationError {
            kind: "model_attributes_type",
            loc: vec![json!("body")],
            msg: "Input should be a valid dictionary or object to extract fields from",
            input,
            ctx: None,
        })
    }

    fn json_invalid(error: String) -> Self {
        Self::single(ValidationError {
            kind: "json_invalid",
            loc: vec![json!("body")],
            msg: "JSON decode error",
            input: json!({}),
            ctx: Some(json!({ "error": error })),
        })
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}
