//! Retrieval of event data files.

use {
    crate::{
        constants::*,
        legacy::{LegacyCredentials, LegacySigner},
        session::SessionAuthenticator,
        Clock, CountryCode, EventDataError, EventFile, GameVersion, RandomSource, SeededRandom, SystemClock,
        ThreadRandom, Transport,
    },
    bytes::Bytes,
    derive_builder::Builder,
    http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT_ENCODING, AUTHORIZATION, CONNECTION, HOST, USER_AGENT},
    log::debug,
    std::sync::Arc,
};

/// Which request-authentication protocol a client uses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Protocol {
    /// Storage-style signed `GET` against the bucket host.
    Legacy,

    /// Token handshake, then a `GET` with `?jwt=<token>` against the events host.
    Session,
}

impl Protocol {
    /// The host serving event data for this protocol.
    pub fn domain(self) -> &'static str {
        match self {
            Self::Legacy => LEGACY_EVENTS_DOMAIN,
            Self::Session => SESSION_EVENTS_DOMAIN,
        }
    }
}

/// Downloads event data files for one country code and game version.
///
/// EventDataClient structs are immutable. Use [`EventDataClientBuilder`] to construct one; the
/// country code, game version and transport are required.
#[derive(Builder, Clone, Debug)]
#[builder(pattern = "owned")]
pub struct EventDataClient {
    /// The regional release to download for.
    country_code: CountryCode,

    /// The game version reported to the token endpoint.
    #[builder(setter(into))]
    game_version: GameVersion,

    /// Use the legacy storage signer instead of the session handshake.
    #[builder(default)]
    legacy: bool,

    /// Credentials for the legacy storage signer. Required when `legacy` is set.
    #[builder(setter(strip_option), default)]
    credentials: Option<LegacyCredentials>,

    /// The transport that executes requests.
    transport: Arc<dyn Transport>,

    /// The clock used for signing timestamps.
    #[builder(default = "Arc::new(SystemClock) as Arc<dyn Clock>")]
    clock: Arc<dyn Clock>,

    /// The source of request nonces.
    #[builder(default = "Arc::new(ThreadRandom) as Arc<dyn RandomSource>")]
    random: Arc<dyn RandomSource>,
}

impl EventDataClient {
    /// Create an [EventDataClientBuilder] to construct an [EventDataClient].
    #[inline]
    pub fn builder() -> EventDataClientBuilder {
        EventDataClientBuilder::default()
    }

    /// The protocol selected by the legacy flag.
    #[inline]
    pub fn protocol(&self) -> Protocol {
        if self.legacy {
            Protocol::Legacy
        } else {
            Protocol::Session
        }
    }

    /// The country code this client downloads for.
    #[inline]
    pub fn country_code(&self) -> CountryCode {
        self.country_code
    }

    /// The host serving event data.
    #[inline]
    pub fn domain(&self) -> &'static str {
        self.protocol().domain()
    }

    /// The URL of `file_name`: `https://<domain>/battlecats<patching code>_production/<file_name>`.
    pub fn target_url(&self, file_name: &str) -> String {
        format!("https://{}/battlecats{}_production/{}", self.domain(), self.country_code.patching_code(), file_name)
    }

    /// Headers sent on every final retrieval.
    fn base_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODING_GZIP));
        headers.insert(CONNECTION, HeaderValue::from_static(CONNECTION_KEEP_ALIVE));
        headers.insert(HOST, HeaderValue::from_static(self.domain()));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_DOWNLOAD));
        headers
    }

    /// Build the fully authorized final request for `file_name`: the URL to fetch and its headers.
    ///
    /// For the session protocol this runs the whole handshake.
    pub fn authorized_request(&self, file_name: &str) -> Result<(String, HeaderMap), EventDataError> {
        let url = self.target_url(file_name);
        let mut headers = self.base_headers();

        match self.protocol() {
            Protocol::Legacy => {
                let credentials = self.credentials.clone().ok_or(EventDataError::MissingCredentials)?;
                let signer = LegacySigner::new(credentials, self.domain());
                let signature = signer.sign(&url, self.clock.now());
                headers.insert(AUTHORIZATION, HeaderValue::from_str(&signature.authorization)?);
                headers.insert(
                    HeaderName::from_static(HDR_X_AMZ_CONTENT_SHA256),
                    HeaderValue::from_static(signature.content_sha256),
                );
                headers.insert(HeaderName::from_static(HDR_X_AMZ_DATE), HeaderValue::from_str(&signature.amz_date)?);
                Ok((url, headers))
            }
            Protocol::Session => {
                let auth =
                    SessionAuthenticator::new(self.transport.as_ref(), self.clock.as_ref(), self.random.as_ref());
                let state = auth.authenticate(self.country_code, &self.game_version)?;
                let url = format!("{}?{}={}", url, QP_JWT, state.into_token());
                Ok((url, headers))
            }
        }
    }

    /// Download `file_name` and return the response body unmodified.
    pub fn fetch(&self, file_name: &str) -> Result<Bytes, EventDataError> {
        debug!("Fetching {} for {} using {:?} protocol", file_name, self.country_code, self.protocol());
        let (url, headers) = self.authorized_request(file_name)?;
        let response = self.transport.get(&url, &headers)?;
        let response = response.error_for_status(&self.target_url(file_name))?;
        debug!("Fetched {} for {}: {} bytes", file_name, self.country_code, response.body.len());
        Ok(response.body)
    }

    /// Download one of the known event data files.
    #[inline]
    pub fn fetch_file(&self, file: EventFile) -> Result<Bytes, EventDataError> {
        self.fetch(file.file_name())
    }
}

impl EventDataClientBuilder {
    /// Draw nonces from a generator seeded with `seed`.
    pub fn seed(self, seed: u64) -> Self {
        self.random(Arc::new(SeededRandom::new(seed)))
    }
}
