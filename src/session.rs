//! The token-issuance handshake.
//!
//! A session token is obtained in three round trips:
//! 1. An unauthenticated `GET` issues a fresh inquiry code (account identifier).
//! 2. A signed `POST` exchanges the inquiry code for a password.
//! 3. A signed `POST` exchanges the inquiry code and password for a token.
//!
//! Both `POST` bodies are signed with `HMAC-SHA256(inquiryCode + nonce, body)`. The signature
//! covers the literal body bytes, so each body is serialized once and that same buffer is both
//! signed and sent.

use {
    crate::{
        constants::*,
        crypto::hmac_sha256,
        json::str_field_or_empty,
        Clock, CountryCode, EventDataError, GameVersion, RandomSource, Transport,
    },
    bytes::Bytes,
    http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT_ENCODING, CONNECTION, CONTENT_TYPE, USER_AGENT},
    log::debug,
    serde::Serialize,
    serde_json::Value,
    std::fmt::{Debug, Formatter, Result as FmtResult},
};

/// The values produced by the handshake, in the order they were obtained.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionState {
    inquiry_code: String,
    password: String,
    token: String,
}

impl SessionState {
    /// The inquiry code issued in step 1.
    #[inline]
    pub fn inquiry_code(&self) -> &str {
        &self.inquiry_code
    }

    /// The password issued in step 2.
    #[inline]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The session token issued in step 3.
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Consume the state, keeping only the token.
    pub fn into_token(self) -> String {
        self.token
    }
}

impl Debug for SessionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SessionState")
            .field("inquiry_code", &"<redacted>")
            .field("password", &"<redacted>")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Body of the password request.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    account_code: &'a str,
    account_created_at: String,
    nonce: String,
}

/// Body of the token request. Field order is the wire order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    client_info: ClientInfo<'a>,
    nonce: String,
    password: &'a str,
    account_code: &'a str,
}

#[derive(Serialize)]
struct ClientInfo<'a> {
    client: ClientDescriptor<'a>,
    device: DeviceDescriptor,
    os: OsDescriptor,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientDescriptor<'a> {
    country_code: &'static str,
    version: &'a GameVersion,
}

#[derive(Serialize)]
struct DeviceDescriptor {
    model: &'static str,
}

#[derive(Serialize)]
struct OsDescriptor {
    #[serde(rename = "type")]
    os_type: &'static str,
    version: &'static str,
}

/// Compute the session signature of `body` for `inquiry_code` using `nonce`.
///
/// The result is `nonce` followed by the lower-case hex HMAC-SHA256 of `body`, keyed with
/// `inquiry_code + nonce`.
pub fn sign_body(inquiry_code: &str, body: &[u8], nonce: &str) -> String {
    let key = format!("{}{}", inquiry_code, nonce);
    let mac = hmac_sha256(key.as_bytes(), body);
    let mut result = String::with_capacity(nonce.len() + 2 * mac.len());
    result.push_str(nonce);
    result.push_str(&hex::encode(mac));
    result
}

/// Runs the handshake against the auth endpoints.
#[derive(Debug)]
pub struct SessionAuthenticator<'a> {
    transport: &'a dyn Transport,
    clock: &'a dyn Clock,
    random: &'a dyn RandomSource,
}

impl<'a> SessionAuthenticator<'a> {
    /// Create an authenticator that uses the given transport, clock and nonce source.
    pub fn new(transport: &'a dyn Transport, clock: &'a dyn Clock, random: &'a dyn RandomSource) -> Self {
        Self {
            transport,
            clock,
            random,
        }
    }

    /// Run all three steps in order and return the resulting state.
    pub fn authenticate(
        &self,
        country_code: CountryCode,
        game_version: &GameVersion,
    ) -> Result<SessionState, EventDataError> {
        let inquiry_code = self.inquiry_code()?;
        let password = self.password(&inquiry_code)?;
        let token = self.token(&inquiry_code, &password, country_code, game_version)?;
        Ok(SessionState {
            inquiry_code,
            password,
            token,
        })
    }

    /// Step 1: obtain a new inquiry code.
    fn inquiry_code(&self) -> Result<String, EventDataError> {
        let response =
            self.transport.get(CREATE_ACCOUNT_URL, &HeaderMap::new())?.error_for_status(CREATE_ACCOUNT_URL)?;
        let json: Value = serde_json::from_slice(&response.body)?;
        let inquiry_code = str_field_or_empty(&json, "accountId");
        debug!("Obtained inquiry code ({} chars)", inquiry_code.len());
        Ok(inquiry_code)
    }

    /// Step 2: exchange the inquiry code for a password.
    fn password(&self, inquiry_code: &str) -> Result<String, EventDataError> {
        let timestamp = self.clock.now().timestamp();
        let body = serde_json::to_vec(&PasswordRequest {
            account_code: inquiry_code,
            account_created_at: timestamp.to_string(),
            nonce: self.random.hex_string(BODY_NONCE_LENGTH),
        })?;

        let json = self.signed_post(PASSWORD_URL, inquiry_code, body, timestamp)?;
        let password = str_field_or_empty(&json, "payload.password");
        debug!("Obtained password ({} chars)", password.len());
        Ok(password)
    }

    /// Step 3: exchange the inquiry code and password for a session token.
    fn token(
        &self,
        inquiry_code: &str,
        password: &str,
        country_code: CountryCode,
        game_version: &GameVersion,
    ) -> Result<String, EventDataError> {
        let timestamp = self.clock.now().timestamp();
        let body = serde_json::to_vec(&TokenRequest {
            client_info: ClientInfo {
                client: ClientDescriptor {
                    country_code: country_code.request_code(),
                    version: game_version,
                },
                device: DeviceDescriptor {
                    model: DEVICE_MODEL,
                },
                os: OsDescriptor {
                    os_type: OS_TYPE,
                    version: OS_VERSION,
                },
            },
            nonce: self.random.hex_string(BODY_NONCE_LENGTH),
            password,
            account_code: inquiry_code,
        })?;

        let json = self.signed_post(TOKEN_URL, inquiry_code, body, timestamp)?;
        let token = str_field_or_empty(&json, "payload.token");
        debug!("Obtained session token ({} chars)", token.len());
        Ok(token)
    }

    /// Sign `body` with a fresh nonce.
    pub fn signature(&self, inquiry_code: &str, body: &[u8]) -> String {
        let nonce = self.random.hex_string(SESSION_SIGNATURE_NONCE_LENGTH);
        sign_body(inquiry_code, body, &nonce)
    }

    /// Build the headers for a signed `POST` of `body` made at the unix time `timestamp`.
    pub fn signed_headers(
        &self,
        inquiry_code: &str,
        body: &[u8],
        timestamp: i64,
    ) -> Result<HeaderMap, EventDataError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODING_GZIP));
        headers.insert(CONNECTION, HeaderValue::from_static(CONNECTION_KEEP_ALIVE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(
            HeaderName::from_static(HDR_NYANKO_SIGNATURE),
            HeaderValue::from_str(&self.signature(inquiry_code, body))?,
        );
        headers.insert(HeaderName::from_static(HDR_NYANKO_TIMESTAMP), HeaderValue::from(timestamp));
        headers.insert(
            HeaderName::from_static(HDR_NYANKO_SIGNATURE_VERSION),
            HeaderValue::from_static(SESSION_SIGNATURE_VERSION),
        );
        headers.insert(
            HeaderName::from_static(HDR_NYANKO_SIGNATURE_ALGORITHM),
            HeaderValue::from_static(SESSION_SIGNATURE_ALGORITHM),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_SESSION));
        Ok(headers)
    }

    fn signed_post(
        &self,
        url: &str,
        inquiry_code: &str,
        body: Vec<u8>,
        timestamp: i64,
    ) -> Result<Value, EventDataError> {
        let headers = self.signed_headers(inquiry_code, &body, timestamp)?;
        let response = self.transport.post(url, &headers, Bytes::from(body))?.error_for_status(url)?;
        Ok(serde_json::from_slice(&response.body)?)
    }
}
