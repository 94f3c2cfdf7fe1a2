use {
    serde::{Serialize, Serializer},
    std::{
        convert::Infallible,
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// The game client version reported to the token endpoint.
///
/// The value is never interpreted. The game reports its version as an integer (`130100` for
/// 13.1.0), so a version written as a plain integer serializes as a JSON number; anything else,
/// including digits with a leading zero, is sent as a JSON string.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct GameVersion(String);

impl GameVersion {
    /// Wrap a version identifier.
    pub fn new<S: Into<String>>(version: S) -> Self {
        Self(version.into())
    }

    /// The version exactly as supplied.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The version as an integer, if it is one written in canonical form.
    fn as_integer(&self) -> Option<u64> {
        self.0.parse::<u64>().ok().filter(|n| n.to_string() == self.0)
    }
}

impl Display for GameVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl FromStr for GameVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(Self::new(s))
    }
}

impl From<&str> for GameVersion {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Serialize for GameVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}
