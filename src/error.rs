use {
    http::{
        header::{InvalidHeaderName, InvalidHeaderValue},
        status::StatusCode,
    },
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
        io::Error as IOError,
    },
};

/// Error returned when an event data file cannot be signed, requested, or stored.
#[derive(Debug)]
#[non_exhaustive]
pub enum EventDataError {
    /// The request failed with a non-success HTTP status. The body is left uninterpreted.
    HttpStatus {
        /// The status the server returned.
        status: StatusCode,

        /// The URL that was requested.
        url: String,
    },

    /// Writing the retrieved data failed due to an underlying I/O error.
    IO(IOError),

    /// A country code outside of `en`, `jp`, `kr`, `tw` was supplied.
    InvalidCountryCode(/* code */ String),

    /// The client or credentials could not be built from the supplied configuration.
    InvalidConfiguration(/* message */ String),

    /// An event file name outside of `sale.tsv`, `gatya.tsv`, `item.tsv` was supplied.
    InvalidEventFile(/* file name */ String),

    /// A header name or value could not be represented in an HTTP request.
    InvalidHeaderValue(/* message */ String),

    /// A response body was not valid JSON, or a request body could not be serialized.
    Json(serde_json::Error),

    /// The legacy storage signer was selected but no credentials were configured.
    MissingCredentials,

    /// A required JSON field was absent from a response.
    MissingField(/* dotted path */ String),

    /// The network call failed before a response was received (connection, TLS, timeout).
    Transport(Box<dyn Error + Send + Sync>),

    /// A hash algorithm name outside of `MD5`, `SHA1`, `SHA256` was supplied.
    UnsupportedAlgorithm(/* name */ String),
}

impl Display for EventDataError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::HttpStatus {
                status,
                url,
            } => write!(f, "Request to {} failed with status {}", url, status),
            Self::IO(ref e) => Display::fmt(e, f),
            Self::InvalidCountryCode(code) => write!(f, "Invalid country code: '{}'", code),
            Self::InvalidConfiguration(msg) => f.write_str(msg),
            Self::InvalidEventFile(name) => write!(f, "Invalid event file: '{}'", name),
            Self::InvalidHeaderValue(msg) => f.write_str(msg),
            Self::Json(ref e) => Display::fmt(e, f),
            Self::MissingCredentials => f.write_str("Legacy signing requires an access key id and secret key"),
            Self::MissingField(path) => write!(f, "Response is missing field '{}'", path),
            Self::Transport(ref e) => Display::fmt(e, f),
            Self::UnsupportedAlgorithm(name) => write!(f, "Unsupported hash algorithm: '{}'", name),
        }
    }
}

impl Error for EventDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IO(ref e) => Some(e),
            Self::Json(ref e) => Some(e),
            Self::Transport(ref e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<IOError> for EventDataError {
    fn from(e: IOError) -> EventDataError {
        EventDataError::IO(e)
    }
}

impl From<serde_json::Error> for EventDataError {
    fn from(e: serde_json::Error) -> EventDataError {
        EventDataError::Json(e)
    }
}

impl From<reqwest::Error> for EventDataError {
    fn from(e: reqwest::Error) -> EventDataError {
        EventDataError::Transport(Box::new(e))
    }
}

impl From<InvalidHeaderValue> for EventDataError {
    fn from(e: InvalidHeaderValue) -> EventDataError {
        EventDataError::InvalidHeaderValue(e.to_string())
    }
}

impl From<InvalidHeaderName> for EventDataError {
    fn from(e: InvalidHeaderName) -> EventDataError {
        EventDataError::InvalidHeaderValue(e.to_string())
    }
}

impl From<crate::LegacyCredentialsBuilderError> for EventDataError {
    fn from(e: crate::LegacyCredentialsBuilderError) -> EventDataError {
        EventDataError::InvalidConfiguration(e.to_string())
    }
}

impl From<crate::EventDataClientBuilderError> for EventDataError {
    fn from(e: crate::EventDataClientBuilderError) -> EventDataError {
        EventDataError::InvalidConfiguration(e.to_string())
    }
}
