//! Image-generation hand-off
//!
//! The funnel's only downstream consumer. The shipped client is a console
//! stub that narrates a simulated call; a real integration would slot in
//! behind the same trait.

pub mod mock;
pub mod stub;

pub use mock::MockImageClient;
pub use stub::StubImageClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Hand the compiled prompt to an image generator. Side effect only.
    async fn generate_image(&self, prompt: &str) -> Result<()>;
}
