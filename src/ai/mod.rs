//! AI service integration for the funnel conversation
//!
//! Provides the chat-service seam plus the Gemini implementation and a mock
//! used by orchestration tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiChatClient;
pub use mock::MockChatClient;

use crate::models::Session;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send one user input within a session and return the model's reply.
    ///
    /// On success the (input, reply) pair is appended to the session; on
    /// failure the session is left untouched.
    async fn send_message(&self, session: &mut Session, input: &str) -> Result<String>;
}
