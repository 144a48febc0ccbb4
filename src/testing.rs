//! Test doubles shared by the unit tests

use crate::error::{Error, Result};
use crate::http::{RequestConfig, Sleeper, Transport};
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Records every requested wait and returns immediately
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
    }
}

/// A request as seen by the stub transport
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub request: RequestConfig,
}

type Responder = Box<dyn Fn(&RecordedRequest) -> Result<JsonValue> + Send + Sync>;

/// Transport that replays scripted responses in order, or answers through a
/// responder function once the script runs out
#[derive(Default)]
pub struct StubTransport {
    script: Mutex<VecDeque<Result<JsonValue>>>,
    responder: Option<Responder>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    #[must_use]
    pub fn then(self, response: Result<JsonValue>) -> Self {
        self.script.lock().unwrap().push_back(response);
        self
    }

    /// Queue a successful JSON response
    #[must_use]
    pub fn then_ok(self, body: JsonValue) -> Self {
        self.then(Ok(body))
    }

    /// Answer requests computed from the request itself
    #[must_use]
    pub fn responding<F>(mut self, responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> Result<JsonValue> + Send + Sync + 'static,
    {
        self.responder = Some(Box::new(responder));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, method: Method, url: &str, request: RequestConfig) -> Result<JsonValue> {
        let recorded = RecordedRequest {
            method,
            url: url.to_string(),
            request,
        };
        self.requests.lock().unwrap().push(recorded.clone());

        if let Some(next) = self.script.lock().unwrap().pop_front() {
            return next;
        }
        match &self.responder {
            Some(responder) => responder(&recorded),
            None => Err(Error::Other(format!("unscripted request to {url}"))),
        }
    }
}
