use crate::scene::client::{HttpResponse, Method, Transport, TransportError};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct State {
    replies: VecDeque<Result<HttpResponse, TransportError>>,
    sent: Vec<SentRequest>,
}

/// Scripted in-memory transport. Replies are consumed in order; once they
/// run out every request fails as unreachable.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<State>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.lock().replies.push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(&self, reason: &str) -> &Self {
        self.lock()
            .replies
            .push_back(Err(TransportError(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<SentRequest> {
        self.lock().sent.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Transport for FakeTransport {
    fn endpoint(&self) -> &str {
        "http://scene.test"
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, TransportError> {
        let mut state = self.lock();
        state.sent.push(SentRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        state
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_string())))
    }
}
