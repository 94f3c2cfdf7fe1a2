//! Storage-style (SigV4) signing of a single unsigned-payload `GET`.
//!
//! This is the older way the event data bucket was accessed. It produces an `Authorization`
//! header from a canonical request, a string to sign, and a signing key scoped to the request
//! date, region and service.

use {
    crate::{
        constants::*,
        crypto::sha256_hex,
        signing_key::KSecretKey,
    },
    chrono::{DateTime, NaiveDate, Utc},
    derive_builder::Builder,
    log::trace,
    std::fmt::{Debug, Formatter, Result as FmtResult},
};

/// Credentials and scope for the legacy storage signer.
///
/// LegacyCredentials structs are immutable. Use [`LegacyCredentialsBuilder`] to construct them;
/// only the access key id and secret key must be supplied.
#[derive(Builder, Clone)]
#[builder(build_fn(error = "LegacyCredentialsBuilderError"))]
pub struct LegacyCredentials {
    /// The access key id placed in the credential scope.
    #[builder(setter(into))]
    access_key_id: String,

    /// The raw secret key.
    #[builder(setter(into))]
    secret_key: String,

    /// The region of the bucket.
    #[builder(setter(into), default = "LEGACY_REGION.to_string()")]
    region: String,

    /// The service name.
    #[builder(setter(into), default = "LEGACY_SERVICE.to_string()")]
    service: String,

    /// The string terminating the credential scope.
    #[builder(setter(into), default = "AWS4_REQUEST.to_string()")]
    terminator: String,

    /// The algorithm name leading the string to sign and the Authorization header.
    #[builder(setter(into), default = "AWS4_HMAC_SHA256.to_string()")]
    algorithm: String,
}

/// Error returned when [`LegacyCredentialsBuilder::build`] is missing a required field.
#[derive(Debug)]
pub struct LegacyCredentialsBuilderError(String);

impl From<derive_builder::UninitializedFieldError> for LegacyCredentialsBuilderError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        Self(format!("Legacy credentials require `{}`", e.field_name()))
    }
}

impl std::fmt::Display for LegacyCredentialsBuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl std::error::Error for LegacyCredentialsBuilderError {}

impl LegacyCredentials {
    /// Create a [LegacyCredentialsBuilder] to construct [LegacyCredentials].
    #[inline]
    pub fn builder() -> LegacyCredentialsBuilder {
        LegacyCredentialsBuilder::default()
    }

    /// Retrieve the access key id.
    #[inline]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Retrieve the region.
    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Retrieve the service name.
    #[inline]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Retrieve the scope terminator.
    #[inline]
    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    /// Retrieve the algorithm name.
    #[inline]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The credential scope for `date`: `YYYYMMDD/region/service/terminator`.
    pub fn scope(&self, date: &str) -> String {
        format!("{}/{}/{}/{}", date, self.region, self.service, self.terminator)
    }
}

impl Debug for LegacyCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LegacyCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .field("service", &self.service)
            .field("terminator", &self.terminator)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// The per-request values that go into a legacy signature. Both date strings come from one instant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SigningContext {
    /// The request date, `YYYYMMDD`.
    date: NaiveDate,

    /// The request timestamp, `YYYYMMDDTHHMMSSZ`.
    amz_date: String,

    /// Everything in the URL after the domain.
    canonical_uri: String,
}

impl SigningContext {
    /// Create a signing context for `url` on `domain` at the instant `timestamp`.
    pub fn new(url: &str, domain: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            date: timestamp.date_naive(),
            amz_date: timestamp.format(ISO8601_COMPACT_FORMAT).to_string(),
            canonical_uri: canonical_uri(url, domain).to_string(),
        }
    }

    /// The request date as `YYYYMMDD`.
    pub fn date(&self) -> String {
        self.date.format(ISO8601_DATE_FORMAT).to_string()
    }

    /// The request timestamp as `YYYYMMDDTHHMMSSZ`.
    #[inline]
    pub fn amz_date(&self) -> &str {
        &self.amz_date
    }

    /// The canonical URI.
    #[inline]
    pub fn canonical_uri(&self) -> &str {
        &self.canonical_uri
    }
}

/// The part of `url` after the first occurrence of `domain`.
///
/// No percent-encoding is applied; the event file paths are plain ASCII. If `domain` does not
/// occur in `url`, the whole URL is returned.
pub fn canonical_uri<'a>(url: &'a str, domain: &str) -> &'a str {
    match url.find(domain) {
        Some(pos) => &url[pos + domain.len()..],
        None => url,
    }
}

/// Header values produced by [`LegacySigner::sign`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegacySignature {
    /// Value for the `authorization` header.
    pub authorization: String,

    /// Value for the `x-amz-content-sha256` header.
    pub content_sha256: &'static str,

    /// Value for the `x-amz-date` header. Identical to the timestamp that was signed.
    pub amz_date: String,
}

/// Signs event data `GET` requests against the storage domain.
#[derive(Clone, Debug)]
pub struct LegacySigner {
    credentials: LegacyCredentials,
    secret: KSecretKey,
    domain: String,
}

impl LegacySigner {
    /// Create a signer for requests to `domain`.
    pub fn new<S: Into<String>>(credentials: LegacyCredentials, domain: S) -> Self {
        let secret = KSecretKey::new(&credentials.secret_key);
        Self {
            credentials,
            secret,
            domain: domain.into(),
        }
    }

    /// Build the canonical request for a `GET` of the context's URI.
    pub fn canonical_request(&self, ctx: &SigningContext) -> String {
        let mut result = String::with_capacity(256);
        result.push_str("GET\n");
        result.push_str(ctx.canonical_uri());
        result.push_str("\n\n");
        result.push_str("host:");
        result.push_str(&self.domain);
        result.push('\n');
        result.push_str(HDR_X_AMZ_CONTENT_SHA256);
        result.push(':');
        result.push_str(XACS_UNSIGNED_PAYLOAD);
        result.push('\n');
        result.push_str(HDR_X_AMZ_DATE);
        result.push(':');
        result.push_str(ctx.amz_date());
        result.push_str("\n\n");
        result.push_str(SIGNED_HEADERS);
        result.push('\n');
        result.push_str(XACS_UNSIGNED_PAYLOAD);

        trace!("Canonical request:\n{}", result);
        result
    }

    /// Build the string to sign from the canonical request.
    pub fn string_to_sign(&self, ctx: &SigningContext) -> String {
        let canonical_request = self.canonical_request(ctx);
        let result = format!(
            "{}\n{}\n{}\n{}",
            self.credentials.algorithm,
            ctx.amz_date(),
            self.credentials.scope(&ctx.date()),
            sha256_hex(canonical_request.as_bytes())
        );

        trace!("String to sign:\n{}", result);
        result
    }

    /// Compute the raw signature over the string to sign.
    pub fn signature(&self, ctx: &SigningContext) -> [u8; SHA256_OUTPUT_LEN] {
        let signing_key = self.secret.to_ksigning(
            ctx.date,
            &self.credentials.region,
            &self.credentials.service,
            &self.credentials.terminator,
        );
        signing_key.sign(self.string_to_sign(ctx).as_bytes())
    }

    /// Build the `Authorization` header value.
    pub fn authorization(&self, ctx: &SigningContext) -> String {
        format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            self.credentials.algorithm,
            self.credentials.access_key_id,
            self.credentials.scope(&ctx.date()),
            SIGNED_HEADERS,
            hex::encode(self.signature(ctx))
        )
    }

    /// Sign a `GET` of `url` at the instant `timestamp`.
    pub fn sign(&self, url: &str, timestamp: DateTime<Utc>) -> LegacySignature {
        let ctx = SigningContext::new(url, &self.domain, timestamp);
        LegacySignature {
            authorization: self.authorization(&ctx),
            content_sha256: XACS_UNSIGNED_PAYLOAD,
            amz_date: ctx.amz_date,
        }
    }
}
