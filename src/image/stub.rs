use super::ImageGenerationService;
use crate::Result;
use async_trait::async_trait;

/// Console-only simulation of an image-generation call.
///
/// A real deployment would send the prompt to an image API (Imagen, DALL-E,
/// or similar) and return an artifact reference; this crate only narrates the
/// hand-off.
#[derive(Debug, Default)]
pub struct StubImageClient;

impl StubImageClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageGenerationService for StubImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<()> {
        println!("\n==========================================");
        println!("SENDING FINAL PROMPT TO IMAGE MODEL");
        println!("==========================================");
        println!("Sending >> {}", prompt);
        println!("...");
        println!("Generating image...");
        println!("...");
        println!("SUCCESS: Image generated at hypothetical URL: https://mystorage.com/image123.png");
        println!("==========================================");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_accepts_any_prompt() {
        let client = StubImageClient::new();
        client.generate_image("a cat on a mat").await.unwrap();
    }
}
