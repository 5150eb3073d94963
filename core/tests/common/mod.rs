//! Substitute transport shared by the scenario and vector tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use localize_core::{ApiError, ClientConfig, HttpRequest, HttpResponse, LocalizeClient, Transport};

pub const BASE_URL: &str = "http://localhost:3000";

/// Replays canned responses in order and records every request it sees.
///
/// When the queue runs dry the last response is repeated.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    last: Mutex<Option<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn reply(self, response: HttpResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn respond(self, status: u16, status_text: &str, body: &str) -> Self {
        self.reply(response(status, status_text, body))
    }

    pub fn ok(self, body: &str) -> Self {
        self.respond(200, "OK", body)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(next) = next {
            *last = Some(next);
        }
        last.clone()
            .ok_or_else(|| ApiError::transport("no canned response configured"))
    }
}

/// Client over a shared transport, so the test can inspect it afterwards.
pub fn client(transport: &Arc<RecordingTransport>) -> LocalizeClient {
    LocalizeClient::with_shared_transport(ClientConfig::new(BASE_URL), transport.clone())
}

pub fn response(status: u16, status_text: &str, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        status_text: status_text.to_string(),
        headers: Vec::new(),
        body: body.to_string(),
    }
}
