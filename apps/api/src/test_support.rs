//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{CompletionService, LlmError};

/// Two-page PDF: "Alpha Bravo" on page one, "Charlie Delta" on page two (Helvetica).
pub const TWO_PAGE_PDF: &[u8] = include_bytes!("../tests/fixtures/two_pages.pdf");

/// What a `StubCompletion` answers with.
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Status(u16, String),
    Empty,
}

/// In-process `CompletionService` that records every call.
#[derive(Debug)]
pub struct StubCompletion {
    reply: StubReply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubCompletion {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Status(status, body) => Err(LlmError::Api {
                status: *status,
                body: body.clone(),
            }),
            StubReply::Empty => Err(LlmError::EmptyContent),
        }
    }
}
