mod command;
mod http;

pub use command::CommandPredictor;
pub use http::HttpPredictor;

use crate::{Result, config::PredictorConfig};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// The two-key mapping handed to the contradiction model.
///
/// Field values are kept exactly as received; element types, pair length and
/// index bounds are the model's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialog {
    pub utterances: Vec<Value>,
    pub annotation_target_pair: Vec<Value>,
}

/// Something that scores a dialog for contradiction.
///
/// The returned value is opaque and is passed through to the caller untouched.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict_contradiction(&self, dialog: &Dialog) -> Result<Value>;
}

pub fn from_config(config: &PredictorConfig) -> Arc<dyn Predictor> {
    match config {
        PredictorConfig::Command { command, args, env } => Arc::new(CommandPredictor::new(
            command.clone(),
            args.clone(),
            env.clone(),
        )),
        PredictorConfig::Http { url } => Arc::new(HttpPredictor::new(url.clone())),
    }
}
