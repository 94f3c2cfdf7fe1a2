//! Common constants used throughout the crate.
//!
//! Every literal that ends up on the wire lives here so the signers, the session handshake, and
//! the client agree on the exact bytes. A typo in one of these shows up as a rejected request and
//! nothing else, so keep them in one spot.
//!
//! Tests that check the content of a header or body should not use these constants; they should
//! use hard-coded strings so the tests are also testing for misspellings.
//!
//! Please keep this file organized alphabetically.

/// Value of the `accept-encoding` header on every request.
pub(crate) const ACCEPT_ENCODING_GZIP: &str = "gzip";

/// Alphabet used by [`RandomSource::alpha_string`][crate::RandomSource::alpha_string].
pub(crate) const ALPHA_CHARACTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Content-Type for the session handshake bodies.
pub(crate) const APPLICATION_JSON: &str = "application/json";

/// Signature algorithm name for the legacy storage signer.
pub(crate) const AWS4_HMAC_SHA256: &str = "AWS4-HMAC-SHA256";

/// Prefix prepended to the secret key to form `kSecret`.
pub(crate) const AWS4_PREFIX: &str = "AWS4";

/// String included at the end of the legacy credential scope.
pub(crate) const AWS4_REQUEST: &str = "aws4_request";

/// Length of the random hex nonce embedded in each handshake body.
pub(crate) const BODY_NONCE_LENGTH: usize = 32;

/// Value of the `connection` header on every request.
pub(crate) const CONNECTION_KEEP_ALIVE: &str = "keep-alive";

/// Endpoint that issues a new inquiry code.
pub(crate) const CREATE_ACCOUNT_URL: &str = "https://nyanko-backups.ponosgames.com/?action=createAccount&referenceId=";

/// Device model reported in the token request.
pub(crate) const DEVICE_MODEL: &str = "SM-G955F";

/// Header for `nyanko-signature`
pub(crate) const HDR_NYANKO_SIGNATURE: &str = "nyanko-signature";

/// Header for `nyanko-signature-algorithm`
pub(crate) const HDR_NYANKO_SIGNATURE_ALGORITHM: &str = "nyanko-signature-algorithm";

/// Header for `nyanko-signature-version`
pub(crate) const HDR_NYANKO_SIGNATURE_VERSION: &str = "nyanko-signature-version";

/// Header for `nyanko-timestamp`
pub(crate) const HDR_NYANKO_TIMESTAMP: &str = "nyanko-timestamp";

/// Header for `x-amz-content-sha256`
pub(crate) const HDR_X_AMZ_CONTENT_SHA256: &str = "x-amz-content-sha256";

/// Header for `x-amz-date`
pub(crate) const HDR_X_AMZ_DATE: &str = "x-amz-date";

/// Alphabet used by [`RandomSource::hex_string`][crate::RandomSource::hex_string].
pub(crate) const HEX_CHARACTERS: &[u8] = b"0123456789abcdef";

/// Compact ISO8601 format used for `x-amz-date` and the string to sign.
pub(crate) const ISO8601_COMPACT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Short date format used in the credential scope.
pub(crate) const ISO8601_DATE_FORMAT: &str = "%Y%m%d";

/// Host serving event data when the legacy storage signer is used.
pub(crate) const LEGACY_EVENTS_DOMAIN: &str = "nyanko-events-prd.s3.ap-northeast-1.amazonaws.com";

/// Region of the legacy storage bucket.
pub(crate) const LEGACY_REGION: &str = "ap-northeast-1";

/// Service name of the legacy storage bucket.
pub(crate) const LEGACY_SERVICE: &str = "s3";

/// OS type reported in the token request.
pub(crate) const OS_TYPE: &str = "android";

/// OS version reported in the token request.
pub(crate) const OS_VERSION: &str = "9";

/// Endpoint that exchanges an inquiry code for a password.
pub(crate) const PASSWORD_URL: &str = "https://nyanko-auth.ponosgames.com/v1/users";

/// Query parameter carrying the session token on the final retrieval.
pub(crate) const QP_JWT: &str = "jwt";

/// Fixed timeout, in seconds, for every network call.
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Host serving event data when the session protocol is used.
pub(crate) const SESSION_EVENTS_DOMAIN: &str = "nyanko-events.ponosgames.com";

/// Signature algorithm label sent with session-signed requests.
pub(crate) const SESSION_SIGNATURE_ALGORITHM: &str = "HMACSHA256";

/// Length of the random hex nonce prefixed to a session signature.
pub(crate) const SESSION_SIGNATURE_NONCE_LENGTH: usize = 64;

/// Signature version label sent with session-signed requests.
pub(crate) const SESSION_SIGNATURE_VERSION: &str = "1";

/// The length of a SHA-256 digest in bytes.
pub(crate) const SHA256_OUTPUT_LEN: usize = 32;

/// Signed headers list for the legacy signer.
pub(crate) const SIGNED_HEADERS: &str = "host;x-amz-content-sha256;x-amz-date";

/// Endpoint that exchanges an inquiry code and password for a session token.
pub(crate) const TOKEN_URL: &str = "https://nyanko-auth.ponosgames.com/v1/tokens";

/// User agent sent on the final event data retrieval.
pub(crate) const USER_AGENT_DOWNLOAD: &str = "Dalvik/2.1.0 (Linux; U; Android 9; Pixel 2 Build/PQ3A.190801.002)";

/// User agent sent on the session handshake requests.
pub(crate) const USER_AGENT_SESSION: &str = "Dalvik/2.1.0 (Linux; U; Android 9; SM-G955F Build/N2G48B)";

/// Token used for `x-amz-content-sha256` when the payload is unsigned
pub(crate) const XACS_UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";
