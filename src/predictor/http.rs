use super::{Dialog, Predictor};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Forwards the dialog to a remote inference service and returns its JSON body.
pub struct HttpPredictor {
    client: Client,
    url: String,
}

impl HttpPredictor {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict_contradiction(&self, dialog: &Dialog) -> Result<Value> {
        debug!("Forwarding dialog to {}", self.url);

        let response = self.client.post(&self.url).json(dialog).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::predictor(format!(
                "Inference service returned {}: {}",
                status, body
            )));
        }

        let prediction = response.json::<Value>().await?;
        Ok(prediction)
    }
}
