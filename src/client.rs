//! One-shot client used to check a running gateway by hand.

use crate::{predictor::Dialog, Result};
use serde_json::{json, Value};

pub const DEFAULT_URL: &str = "http://127.0.0.1:8000/predict";

pub fn example_dialog() -> Dialog {
    Dialog {
        utterances: vec![json!("I love cats."), json!("I hate cats.")],
        annotation_target_pair: vec![json!(0), json!(1)],
    }
}

/// POSTs `dialog` to `url` and returns the parsed response body, whatever the
/// status code.
pub async fn send(url: &str, dialog: &Dialog) -> Result<Value> {
    let response = reqwest::Client::new().post(url).json(dialog).send().await?;
    let body = response.json::<Value>().await?;
    Ok(body)
}
