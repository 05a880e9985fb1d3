//! Scripted homework source.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{FetchResult, Watermark};
use crate::error::FetchError;
use crate::port::HomeworkSource;

#[derive(Default)]
struct Script {
    responses: VecDeque<Result<FetchResult, FetchError>>,
    calls: Vec<Watermark>,
}

/// Replays queued responses in order and records the watermark of each call.
///
/// Once the queue is drained every fetch returns an empty batch at `since`.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Mutex<Script>>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    #[must_use]
    pub fn then(self, response: Result<FetchResult, FetchError>) -> Self {
        self.script.lock().responses.push_back(response);
        self
    }

    /// Watermarks passed to `fetch`, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Watermark> {
        self.script.lock().calls.clone()
    }
}

#[async_trait]
impl HomeworkSource for ScriptedSource {
    async fn fetch(&self, since: Watermark) -> Result<FetchResult, FetchError> {
        let mut script = self.script.lock();
        script.calls.push(since);
        script.responses.pop_front().unwrap_or(Ok(FetchResult {
            homeworks: Vec::new(),
            watermark: since,
        }))
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}
