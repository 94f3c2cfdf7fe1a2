//! Blocking HTTP transport.
//!
//! The signing code never touches the network directly; it hands fully-built requests to a
//! [`Transport`]. Responses come back uninterpreted, whatever their status.

use {
    crate::{constants::REQUEST_TIMEOUT_SECS, EventDataError},
    bytes::Bytes,
    http::{header::HeaderMap, status::StatusCode},
    log::debug,
    reqwest::blocking::Client,
    std::{fmt::Debug, time::Duration},
};

/// A raw HTTP response.
#[derive(Clone, Debug)]
pub struct Response {
    /// The response status.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The response body, exactly as received.
    pub body: Bytes,
}

impl Response {
    /// Whether the status is in the 2xx range.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Return `self` if the status is 2xx; otherwise an [`HttpStatus`][EventDataError::HttpStatus] error for `url`.
    pub fn error_for_status(self, url: &str) -> Result<Self, EventDataError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(EventDataError::HttpStatus {
                status: self.status,
                url: url.to_string(),
            })
        }
    }
}

/// Executes HTTP requests.
///
/// Implementations must apply a fixed timeout and must not retry.
pub trait Transport: Debug {
    /// Issue a `GET` for `url` with exactly `headers`.
    fn get(&self, url: &str, headers: &HeaderMap) -> Result<Response, EventDataError>;

    /// Issue a `POST` of `body` to `url` with exactly `headers`.
    fn post(&self, url: &str, headers: &HeaderMap, body: Bytes) -> Result<Response, EventDataError>;
}

/// A [`Transport`] backed by a blocking `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the standard 30 second timeout.
    pub fn new() -> Result<Self, EventDataError> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub(crate) fn with_timeout(timeout: Duration) -> Result<Self, EventDataError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
        })
    }

    fn execute(&self, request: reqwest::blocking::RequestBuilder) -> Result<Response, EventDataError> {
        let response = request.send()?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?;
        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, headers: &HeaderMap) -> Result<Response, EventDataError> {
        debug!("GET {}", redact_query(url));
        let response = self.execute(self.client.get(url).headers(headers.clone()))?;
        debug!("GET {} -> {}", redact_query(url), response.status);
        Ok(response)
    }

    fn post(&self, url: &str, headers: &HeaderMap, body: Bytes) -> Result<Response, EventDataError> {
        debug!("POST {} ({} bytes)", url, body.len());
        let response = self.execute(self.client.post(url).headers(headers.clone()).body(body))?;
        debug!("POST {} -> {}", url, response.status);
        Ok(response)
    }
}

/// Strip the query string so tokens never reach the log.
fn redact_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

#[cfg(test)]
mod tests {
    use {
        super::{redact_query, HttpTransport, Transport},
        crate::EventDataError,
        bytes::Bytes,
        http::{
            header::{HeaderMap, HeaderValue},
            StatusCode,
        },
        std::time::Duration,
    };

    #[test_log::test]
    fn test_get_passes_headers_and_returns_raw_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/battlecatsen_production/item.tsv")
            .match_header("user-agent", "test-agent")
            .match_header("x-custom", "1")
            .with_status(200)
            .with_header("content-type", "text/tab-separated-values")
            .with_body("a\tb\n")
            .create();

        let mut headers = HeaderMap::new();
        headers.insert("user-agent", HeaderValue::from_static("test-agent"));
        headers.insert("x-custom", HeaderValue::from_static("1"));

        let transport = HttpTransport::new().unwrap();
        let url = format!("{}/battlecatsen_production/item.tsv", server.url());
        let response = transport.get(&url, &headers).unwrap();

        mock.assert();
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.is_success());
        assert_eq!(response.body, Bytes::from_static(b"a\tb\n"));
        assert_eq!(response.headers.get("content-type").unwrap(), "text/tab-separated-values");
    }

    #[test_log::test]
    fn test_post_sends_body_verbatim() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/v1/users")
            .match_header("content-type", "application/json")
            .match_body(r#"{"a":1,"b":"c"}"#)
            .with_status(200)
            .with_body(r#"{"payload":{"password":"pw"}}"#)
            .create();

        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let transport = HttpTransport::new().unwrap();
        let url = format!("{}/v1/users", server.url());
        let response = transport.post(&url, &headers, Bytes::from_static(br#"{"a":1,"b":"c"}"#)).unwrap();

        mock.assert();
        assert_eq!(response.body, Bytes::from_static(br#"{"payload":{"password":"pw"}}"#));
    }

    #[test_log::test]
    fn test_non_success_is_returned_not_raised() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/missing").with_status(403).with_body("denied").create();

        let transport = HttpTransport::new().unwrap();
        let url = format!("{}/missing", server.url());
        let response = transport.get(&url, &HeaderMap::new()).unwrap();
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.body, Bytes::from_static(b"denied"));

        match response.error_for_status(&url) {
            Err(EventDataError::HttpStatus {
                status,
                url: failed,
            }) => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(failed, url);
            }
            other => panic!("Expected HttpStatus; got {:?}", other),
        }
    }

    #[test_log::test]
    fn test_connection_failure_is_transport_error() {
        let transport = HttpTransport::with_timeout(Duration::from_millis(500)).unwrap();
        // Port 9 (discard) on localhost is not expected to accept HTTP connections.
        match transport.get("http://127.0.0.1:9/", &HeaderMap::new()) {
            Err(EventDataError::Transport(_)) => (),
            other => panic!("Expected Transport; got {:?}", other),
        }
    }

    #[test_log::test]
    fn test_redact_query() {
        assert_eq!(redact_query("https://a.example/x.tsv?jwt=secret"), "https://a.example/x.tsv");
        assert_eq!(redact_query("https://a.example/x.tsv"), "https://a.example/x.tsv");
    }
}
