use crate::domain::{AppError, PromptRequest};
use crate::ports::{ModelClient, ModelClientFactory};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays scripted outputs in order and records every request it receives.
#[derive(Clone)]
pub struct FakeModelClient {
    responses: Arc<Mutex<VecDeque<Result<String, AppError>>>>,
    requests: Arc<Mutex<Vec<PromptRequest>>>,
}

impl FakeModelClient {
    pub fn new(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ModelClient for FakeModelClient {
    fn analyze(&self, request: &PromptRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(AppError::ModelApiError { message: "no scripted response".into(), status: None })
        })
    }
}

pub struct FakeModelClientFactory {
    client: Option<FakeModelClient>,
}

impl FakeModelClientFactory {
    pub fn new(client: FakeModelClient) -> Self {
        Self { client: Some(client) }
    }

    /// A factory that fails like a missing credential would.
    pub fn unavailable() -> Self {
        Self { client: None }
    }
}

impl ModelClientFactory for FakeModelClientFactory {
    fn create(&self) -> Result<Box<dyn ModelClient>, AppError> {
        match &self.client {
            Some(client) => Ok(Box::new(client.clone())),
            None => Err(AppError::EnvironmentVariableMissing("OPENAI_API_KEY".into())),
        }
    }
}
