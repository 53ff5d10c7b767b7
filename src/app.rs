//! Application orchestration for the three-phase funnel conversation.

use crate::ai::{ChatService, GeminiChatClient};
use crate::extract;
use crate::image::{ImageGenerationService, StubImageClient};
use crate::models::{Config, Phase, Session};
use crate::Result;
use tracing::{info, warn};

/// Coordinates the scripted conversation, extraction, and image hand-off.
pub struct App {
    chat: Box<dyn ChatService>,
    image: Box<dyn ImageGenerationService>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub chat: Box<dyn ChatService>,
    pub image: Box<dyn ImageGenerationService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses that
    /// need to inject mocks.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            chat: services.chat,
            image: services.image,
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        info!(
            "Chat provider: Gemini (model: {}, temperature: {})",
            config.chat_model, config.temperature
        );

        Ok(Self::with_services(AppServices {
            chat: Box::new(GeminiChatClient::new(
                config.gemini_api_key,
                config.chat_model,
                config.temperature,
            )),
            image: Box::new(StubImageClient::new()),
        }))
    }

    /// Run the funnel: three strictly ordered turns, then extraction.
    ///
    /// A final response without a fenced block is a diagnostic, not a
    /// failure; the image service is only invoked when a block is found.
    pub async fn run(&self, idea: &str, archetype: &str, recipe: &str) -> Result<()> {
        let mut session = Session::new();

        // The model's phase behavior is conditioned on prior turns, so these
        // three exchanges must happen in order within one session.
        self.run_turn(&mut session, idea, Phase::Strategy).await?;
        self.run_turn(&mut session, archetype, Phase::Recipes)
            .await?;
        let final_response = self.run_turn(&mut session, recipe, Phase::Compile).await?;

        match extract::fenced_block(&final_response) {
            Some(prompt) => {
                info!("Extracted final prompt ({} chars)", prompt.len());
                self.image.generate_image(&prompt).await?;
            }
            None => {
                warn!("Final response contains no fenced prompt block");
                println!("Error: Could not find the final prompt code block in the response.");
            }
        }

        Ok(())
    }

    async fn run_turn(&self, session: &mut Session, input: &str, phase: Phase) -> Result<String> {
        println!("\n--- User Input ({}) ---> {}", phase.label(), input);

        let response = self.chat.send_message(session, input).await?;

        println!("\n<--- Response ({}) ---\n{}\n", phase.label(), response);
        info!(
            "Completed {} ({} session entries)",
            phase.label(),
            session.len()
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppServices};
    use crate::ai::MockChatClient;
    use crate::image::MockImageClient;

    const FINAL_WITH_FENCE: &str =
        "Here is your prompt:\n```markdown\nA lady eating ice cream, neon night, 85mm\n```";

    fn build_test_app(chat: MockChatClient, image: MockImageClient) -> App {
        App::with_services(AppServices {
            chat: Box::new(chat),
            image: Box::new(image),
        })
    }

    #[tokio::test]
    async fn test_run_sends_three_turns_in_order() {
        let chat = MockChatClient::new()
            .with_reply("Options A-D".to_string())
            .with_reply("Recipes 1-3".to_string())
            .with_reply(FINAL_WITH_FENCE.to_string());
        let chat_probe = chat.clone();
        let image = MockImageClient::new();

        let app = build_test_app(chat, image);
        app.run("A lady is eating ice cream at night", "C", "2")
            .await
            .unwrap();

        assert_eq!(
            chat_probe.seen_inputs(),
            vec!["A lady is eating ice cream at night", "C", "2"]
        );
        assert_eq!(chat_probe.seen_context_lens(), vec![0, 2, 4]);
    }

    #[tokio::test]
    async fn test_run_hands_extracted_prompt_to_image_service() {
        let chat = MockChatClient::new()
            .with_reply("Options A-D".to_string())
            .with_reply("Recipes 1-3".to_string())
            .with_reply(FINAL_WITH_FENCE.to_string());
        let image = MockImageClient::new();
        let image_probe = image.clone();

        let app = build_test_app(chat, image);
        app.run("idea", "C", "2").await.unwrap();

        assert_eq!(
            image_probe.received_prompts(),
            vec!["A lady eating ice cream, neon night, 85mm"]
        );
    }

    #[tokio::test]
    async fn test_run_without_fence_skips_image_service() {
        let chat = MockChatClient::new()
            .with_reply("Options A-D".to_string())
            .with_reply("Recipes 1-3".to_string())
            .with_reply("No fences here".to_string());
        let image = MockImageClient::new();
        let image_probe = image.clone();

        let app = build_test_app(chat, image);
        // Missing block is a diagnostic, not an error.
        app.run("idea", "C", "2").await.unwrap();

        assert_eq!(image_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_run_propagates_chat_failure() {
        let chat = MockChatClient::new().with_failure();
        let image = MockImageClient::new();
        let image_probe = image.clone();

        let app = build_test_app(chat, image);
        let err = app.run("idea", "C", "2").await.unwrap_err();

        assert!(matches!(err, crate::Error::AiProvider(_)));
        assert_eq!(image_probe.get_call_count(), 0);
    }
}
