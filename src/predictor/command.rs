use super::{Dialog, Predictor};
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Runs one process per prediction: the dialog goes in on stdin as JSON, the
/// prediction comes back on stdout as JSON.
pub struct CommandPredictor {
    command: String,
    args: Vec<String>,
    env: HashMap<String, String>,
}

impl CommandPredictor {
    pub fn new(command: String, args: Vec<String>, env: HashMap<String, String>) -> Self {
        Self { command, args, env }
    }
}

#[async_trait]
impl Predictor for CommandPredictor {
    async fn predict_contradiction(&self, dialog: &Dialog) -> Result<Value> {
        let input = serde_json::to_vec(dialog)?;

        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args);
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().map_err(|e| {
            Error::predictor(format!(
                "Failed to spawn predictor process {}: {}",
                self.command, e
            ))
        })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::internal("Failed to get stdin for predictor process"))?;

        // stdin is fed while stdout/stderr are drained so neither side can
        // stall on a full pipe. The child may exit without reading all of it.
        // The pipe closes when this future drops stdin.
        let write_input = async move {
            match stdin.write_all(&input).await {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        };

        let (written, output) = tokio::join!(write_input, child.wait_with_output());

        let output = output
            .map_err(|e| Error::predictor(format!("Failed to wait for predictor process: {}", e)))?;
        written
            .map_err(|e| Error::predictor(format!("Failed to write to predictor process: {}", e)))?;

        if !output.status.success() {
            return Err(Error::predictor(format!(
                "Predictor process exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        debug!("Predictor process returned {} bytes", output.stdout.len());

        serde_json::from_slice(&output.stdout)
            .map_err(|e| Error::predictor(format!("Failed to parse predictor output: {}", e)))
    }
}
