use {
    crate::EventDataError,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// A regional release of the game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CountryCode {
    /// English (global) release.
    En,

    /// Japanese release.
    Jp,

    /// Korean release.
    Kr,

    /// Taiwanese release.
    Tw,
}

impl CountryCode {
    /// All supported country codes.
    pub const ALL: [CountryCode; 4] = [CountryCode::En, CountryCode::Jp, CountryCode::Kr, CountryCode::Tw];

    /// The two-letter code, e.g. `en`.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Jp => "jp",
            Self::Kr => "kr",
            Self::Tw => "tw",
        }
    }

    /// The segment inserted into the event data path, `battlecats<patching code>_production`.
    ///
    /// The Japanese release has no suffix.
    pub fn patching_code(self) -> &'static str {
        match self {
            Self::Jp => "",
            other => other.code(),
        }
    }

    /// The code reported in the token request's client info.
    pub fn request_code(self) -> &'static str {
        match self {
            Self::Jp => "ja",
            other => other.code(),
        }
    }
}

impl Display for CountryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

impl FromStr for CountryCode {
    type Err = EventDataError;

    fn from_str(s: &str) -> Result<Self, EventDataError> {
        let lower = s.to_ascii_lowercase();
        CountryCode::ALL
            .into_iter()
            .find(|cc| cc.code() == lower)
            .ok_or_else(|| EventDataError::InvalidCountryCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::CountryCode,
        crate::EventDataError,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_codes() {
        assert_eq!(CountryCode::En.patching_code(), "en");
        assert_eq!(CountryCode::Jp.patching_code(), "");
        assert_eq!(CountryCode::Kr.patching_code(), "kr");
        assert_eq!(CountryCode::Tw.patching_code(), "tw");

        assert_eq!(CountryCode::En.request_code(), "en");
        assert_eq!(CountryCode::Jp.request_code(), "ja");
        assert_eq!(CountryCode::Kr.request_code(), "kr");
        assert_eq!(CountryCode::Tw.request_code(), "tw");
    }

    #[test_log::test]
    fn test_parse() {
        for cc in CountryCode::ALL {
            assert_eq!(CountryCode::from_str(&cc.to_string()).unwrap(), cc);
        }
        assert_eq!(CountryCode::from_str("JP").unwrap(), CountryCode::Jp);

        match CountryCode::from_str("ja") {
            Err(EventDataError::InvalidCountryCode(code)) => assert_eq!(code, "ja"),
            other => panic!("Expected InvalidCountryCode; got {:?}", other),
        }
        assert!(CountryCode::from_str("").is_err());
    }
}
