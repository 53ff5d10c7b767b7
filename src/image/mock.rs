use super::ImageGenerationService;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Records hand-off calls so tests can assert whether and with what prompt
/// image generation was invoked.
#[derive(Clone, Default)]
pub struct MockImageClient {
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<()> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(())
    }
}
