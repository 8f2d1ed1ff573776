#![allow(dead_code)]

use async_trait::async_trait;
use code_assist::{Error, Result, llm::CompletionClient};
use std::sync::{Arc, Mutex};

/// Mock completion client that records every prompt it receives
pub struct MockCompletionClient {
    prompts: Arc<Mutex<Vec<String>>>,
    outcome: std::result::Result<String, String>,
}

impl MockCompletionClient {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            outcome: Ok(text.into()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            outcome: Err(message.into()),
        }
    }

    /// Shared handle to the recorded prompts, usable after the client is moved
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.outcome {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(Error::completion(message.clone())),
        }
    }
}
