//! Data models and structures
//!
//! Defines the conversational session, turn phases, and application
//! configuration.

use serde::{Deserialize, Serialize};

/// Who authored a session entry, mirroring the Gemini API role strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: Role,
    pub text: String,
}

/// Explicit, owned conversational context.
///
/// Every turn sends the full ordered history to the remote service, so the
/// context presented at turn N is exactly the entries recorded for turns
/// 1..N-1. Entries are only appended, never reordered or dropped.
#[derive(Debug, Clone, Default)]
pub struct Session {
    entries: Vec<ChatEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed (input, reply) exchange, input first.
    pub fn record_turn(&mut self, input: &str, reply: &str) {
        self.entries.push(ChatEntry {
            role: Role::User,
            text: input.to_string(),
        });
        self.entries.push(ChatEntry {
            role: Role::Model,
            text: reply.to_string(),
        });
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three fixed stages of the funnel conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Strategy,
    Recipes,
    Compile,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Strategy => "Phase 1: Strategy Menu",
            Phase::Recipes => "Phase 2: Recipe Menu",
            Phase::Compile => "Phase 3: Final Prompt",
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub chat_model: String,
    pub temperature: f32,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let temperature = match std::env::var("TEMPERATURE") {
            Ok(raw) => raw.parse::<f32>().map_err(|_| {
                crate::Error::Config(format!("TEMPERATURE is not a valid number: {}", raw))
            })?,
            Err(_) => 0.7,
        };

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?,
            chat_model: std::env::var("CHAT_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-pro-latest".to_string()),
            temperature,
        })
    }
}
