use async_trait::async_trait;
use contradiction_gateway::{
    Error, Result,
    predictor::{Dialog, Predictor},
};
use mockall::mock;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Stub predictor that returns a fixed value and records every dialog it sees
#[derive(Debug, Clone)]
pub struct RecordingPredictor {
    pub response: Value,
    pub calls: Arc<Mutex<Vec<Dialog>>>,
}

impl RecordingPredictor {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_calls(&self) -> Vec<Dialog> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Predictor for RecordingPredictor {
    async fn predict_contradiction(&self, dialog: &Dialog) -> Result<Value> {
        self.calls.lock().unwrap().push(dialog.clone());
        Ok(self.response.clone())
    }
}

/// Predictor that always fails, like a model rejecting out-of-range indices
#[derive(Debug, Default)]
pub struct FailingPredictor;

#[async_trait]
impl Predictor for FailingPredictor {
    async fn predict_contradiction(&self, _dialog: &Dialog) -> Result<Value> {
        Err(Error::predictor("IndexError: list index out of range"))
    }
}

/// Panics on the first call, then answers normally
#[derive(Debug)]
pub struct PanicOncePredictor {
    panicked: AtomicBool,
    response: Value,
}

impl PanicOncePredictor {
    pub fn new(response: Value) -> Self {
        Self {
            panicked: AtomicBool::new(false),
            response,
        }
    }
}

#[async_trait]
impl Predictor for PanicOncePredictor {
    async fn predict_contradiction(&self, _dialog: &Dialog) -> Result<Value> {
        if !self.panicked.swap(true, Ordering::SeqCst) {
            panic!("model crashed");
        }
        Ok(self.response.clone())
    }
}

mock! {
    pub Model {}

    #[async_trait]
    impl Predictor for Model {
        async fn predict_contradiction(&self, dialog: &Dialog) -> Result<Value>;
    }
}
