//! The `bcedd` crate downloads the Battle Cats event data files (`sale.tsv`, `gatya.tsv`,
//! `item.tsv`) from the game's content servers.
//!
//! The files are access-restricted. Two mutually exclusive ways of authorizing the download are
//! supported:
//!
//! * **Session** (default): a three-step handshake obtains an inquiry code, a password, and
//!   finally a session token, which is appended to the file URL as `?jwt=<token>`. The handshake
//!   bodies are signed with HMAC-SHA256 keyed by the inquiry code and a fresh nonce.
//! * **Legacy**: the file is fetched directly from the storage bucket with a SigV4-style
//!   `Authorization` header. This requires an access key id and secret key supplied by the caller.
//!
//! # Example
//! ```no_run
//! use bcedd::{CountryCode, EventDataClient, EventFile, HttpTransport};
//! use std::sync::Arc;
//!
//! let client = EventDataClient::builder()
//!     .country_code(CountryCode::En)
//!     .game_version("130100")
//!     .transport(Arc::new(HttpTransport::new().unwrap()))
//!     .build()
//!     .unwrap();
//!
//! let data = client.fetch_file(EventFile::Gatya).unwrap();
//! println!("{} bytes", data.len());
//! ```
//!
//! Everything runs synchronously, one request at a time. Clock and randomness are injected
//! ([`Clock`], [`RandomSource`]) so signatures can be reproduced exactly in tests.
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod client;
mod clock;
mod constants;
mod country_code;
mod crypto;
mod download;
mod error;
mod event_file;
mod game_version;
mod json;
mod legacy;
mod random;
mod session;
mod signing_key;
mod transport;

pub use crate::{
    client::{EventDataClient, EventDataClientBuilder, EventDataClientBuilderError, Protocol},
    clock::{Clock, FixedClock, SystemClock},
    country_code::CountryCode,
    crypto::{hash, hmac, HashAlgorithm},
    download::{download_all, download_files, save_file},
    error::EventDataError,
    event_file::EventFile,
    game_version::GameVersion,
    json::{str_field, str_field_or_empty},
    legacy::{
        canonical_uri, LegacyCredentials, LegacyCredentialsBuilder, LegacyCredentialsBuilderError, LegacySignature,
        LegacySigner, SigningContext,
    },
    random::{RandomSource, SeededRandom, ThreadRandom},
    session::{sign_body, SessionAuthenticator, SessionState},
    signing_key::{KDateKey, KRegionKey, KSecretKey, KServiceKey, KSigningKey},
    transport::{HttpTransport, Response, Transport},
};
