#![allow(dead_code)]

use {
    bcedd::{EventDataError, RandomSource, Response, Transport},
    bytes::Bytes,
    http::{header::HeaderMap, StatusCode},
    std::{collections::VecDeque, sync::Mutex},
};

/// A request captured by [`RecordingTransport`].
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.to_str().unwrap())
    }

    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

/// A transport that replays canned responses in order and records every request.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<(StatusCode, &'static str)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    pub fn new(responses: &[(StatusCode, &'static str)]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().copied().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, method: &'static str, url: &str, headers: &HeaderMap, body: Bytes) -> Response {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });

        let (status, body) = self.responses.lock().unwrap().pop_front().expect("no canned response left");
        Response {
            status,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }
}

impl Transport for RecordingTransport {
    fn get(&self, url: &str, headers: &HeaderMap) -> Result<Response, EventDataError> {
        Ok(self.respond("GET", url, headers, Bytes::new()))
    }

    fn post(&self, url: &str, headers: &HeaderMap, body: Bytes) -> Result<Response, EventDataError> {
        Ok(self.respond("POST", url, headers, body))
    }
}

/// A random source that hands out pre-chosen hex strings in order.
#[derive(Debug)]
pub struct QueuedNonces {
    nonces: Mutex<VecDeque<&'static str>>,
}

impl QueuedNonces {
    pub fn new(nonces: &[&'static str]) -> Self {
        Self {
            nonces: Mutex::new(nonces.iter().copied().collect()),
        }
    }
}

impl RandomSource for QueuedNonces {
    fn fill_bytes(&self, _dest: &mut [u8]) {
        panic!("unexpected request for random bytes");
    }

    fn pick(&self, _alphabet: &[u8], len: usize) -> String {
        let nonce = self.nonces.lock().unwrap().pop_front().expect("no nonce left");
        assert_eq!(nonce.len(), len, "queued nonce has the wrong length");
        nonce.to_string()
    }
}
