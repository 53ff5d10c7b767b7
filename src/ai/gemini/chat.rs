use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, Part};
use crate::ai::ChatService;
use crate::models::Session;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest {
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: Option<ChatGenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

pub struct GeminiChatClient {
    http: GeminiHttpClient,
    temperature: f32,
}

impl GeminiChatClient {
    pub fn new(api_key: String, model: String, temperature: f32) -> Self {
        Self::new_with_client(api_key, model, temperature, reqwest::Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        temperature: f32,
        client: reqwest::Client,
    ) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
            temperature,
        }
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
    }

    /// Prior session entries followed by the pending user input.
    fn build_contents(session: &Session, input: &str) -> Vec<Content> {
        session
            .entries()
            .iter()
            .map(|entry| Content {
                role: Some(entry.role.as_str().to_string()),
                parts: vec![Part {
                    text: entry.text.clone(),
                }],
            })
            .chain(std::iter::once(Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: input.to_string(),
                }],
            }))
            .collect()
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiChatClient);

#[async_trait]
impl ChatService for GeminiChatClient {
    async fn send_message(&self, session: &mut Session, input: &str) -> Result<String> {
        let request = ChatRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: prompts::SYSTEM.to_string(),
                }],
            }),
            contents: Self::build_contents(session, input),
            generation_config: Some(ChatGenerationConfig {
                temperature: Some(self.temperature),
            }),
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        let reply = Self::extract_text(&response)
            .ok_or_else(|| Error::AiProvider("No text in Gemini chat response".to_string()))?;

        session.record_turn(input, &reply);
        Ok(reply)
    }
}
