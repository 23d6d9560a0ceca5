//! `MockTransport` — a test double for `HttpTransport`.
//!
//! Useful in unit and integration tests where a node should build real
//! requests but nothing may leave the process.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::{HttpRequest, HttpTransport, TransportError};

/// Behaviour injected into `MockTransport` at construction time.
pub enum MockBehaviour {
    /// Answer every request with the same JSON value.
    ReturnValue(Value),
    /// Fail every request with the same error.
    Fail(TransportError),
    /// Pop one scripted outcome per request; the last one repeats.
    Sequence(Mutex<VecDeque<Result<Value, TransportError>>>),
}

/// A mock transport that records every request it receives and returns a
/// programmer-specified result.
pub struct MockTransport {
    /// What the transport will do when `send` is called.
    pub behaviour: MockBehaviour,
    /// All requests seen by this transport (in call order).
    pub calls: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    /// Create a mock that always succeeds with the given value.
    pub fn returning(value: Value) -> Self {
        Self::with_behaviour(MockBehaviour::ReturnValue(value))
    }

    /// Create a mock that always fails with the given error.
    pub fn failing(error: TransportError) -> Self {
        Self::with_behaviour(MockBehaviour::Fail(error))
    }

    /// Create a mock that answers with `outcomes` in order.
    pub fn sequence(outcomes: Vec<Result<Value, TransportError>>) -> Self {
        Self::with_behaviour(MockBehaviour::Sequence(Mutex::new(outcomes.into())))
    }

    fn with_behaviour(behaviour: MockBehaviour) -> Self {
        Self {
            behaviour,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of requests this transport has received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(request);

        match &self.behaviour {
            MockBehaviour::ReturnValue(v) => Ok(v.clone()),
            MockBehaviour::Fail(err) => Err(err.clone()),
            MockBehaviour::Sequence(queue) => {
                let mut queue = queue.lock().unwrap();
                if queue.len() > 1 {
                    queue.pop_front().unwrap_or(Ok(Value::Null))
                } else {
                    queue.front().cloned().unwrap_or(Ok(Value::Null))
                }
            }
        }
    }
}
