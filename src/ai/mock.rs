use super::ChatService;
use crate::models::Session;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted chat service for tests.
///
/// Replies are consumed in the order they were queued; each call also records
/// the input and the session length it observed, so tests can assert the
/// turn-ordering invariant.
#[derive(Clone)]
pub struct MockChatClient {
    replies: Arc<Mutex<Vec<String>>>,
    seen_inputs: Arc<Mutex<Vec<String>>>,
    seen_context_lens: Arc<Mutex<Vec<usize>>>,
    call_count: Arc<Mutex<usize>>,
    fail: Arc<Mutex<bool>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            seen_inputs: Arc::new(Mutex::new(Vec::new())),
            seen_context_lens: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_reply(self, reply: String) -> Self {
        self.replies.lock().unwrap().push(reply);
        self
    }

    /// Make every subsequent call fail with an AI provider error.
    pub fn with_failure(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn seen_inputs(&self) -> Vec<String> {
        self.seen_inputs.lock().unwrap().clone()
    }

    /// Session lengths observed at the start of each call.
    pub fn seen_context_lens(&self) -> Vec<usize> {
        self.seen_context_lens.lock().unwrap().clone()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn send_message(&self, session: &mut Session, input: &str) -> Result<String> {
        if *self.fail.lock().unwrap() {
            return Err(Error::AiProvider("mock chat failure".to_string()));
        }

        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        self.seen_inputs.lock().unwrap().push(input.to_string());
        self.seen_context_lens.lock().unwrap().push(session.len());

        let replies = self.replies.lock().unwrap();
        let reply = if replies.is_empty() {
            format!("Mock reply to: {}", input)
        } else {
            let index = (*count - 1) % replies.len();
            replies[index].clone()
        };

        session.record_turn(input, &reply);
        Ok(reply)
    }
}
