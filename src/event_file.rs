use {
    crate::{CountryCode, EventDataError},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// An event data file published by the game servers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EventFile {
    /// `sale.tsv`: sale and event schedule.
    Sale,

    /// `gatya.tsv`: rare gacha schedule.
    Gatya,

    /// `item.tsv`: item shop schedule.
    Item,
}

impl EventFile {
    /// All event data files, in download order.
    pub const ALL: [EventFile; 3] = [EventFile::Sale, EventFile::Gatya, EventFile::Item];

    /// The file name on the server.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Sale => "sale.tsv",
            Self::Gatya => "gatya.tsv",
            Self::Item => "item.tsv",
        }
    }

    /// The local file name for this file downloaded for `country_code`, e.g. `en_sale.tsv`.
    pub fn output_name(self, country_code: CountryCode) -> String {
        format!("{}_{}", country_code, self.file_name())
    }
}

impl Display for EventFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.file_name())
    }
}

impl FromStr for EventFile {
    type Err = EventDataError;

    fn from_str(s: &str) -> Result<Self, EventDataError> {
        EventFile::ALL
            .into_iter()
            .find(|file| file.file_name() == s)
            .ok_or_else(|| EventDataError::InvalidEventFile(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::EventFile,
        crate::{CountryCode, EventDataError},
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_names() {
        assert_eq!(EventFile::from_str("sale.tsv").unwrap(), EventFile::Sale);
        assert_eq!(EventFile::from_str("gatya.tsv").unwrap(), EventFile::Gatya);
        assert_eq!(EventFile::from_str("item.tsv").unwrap(), EventFile::Item);
        assert_eq!(EventFile::Item.output_name(CountryCode::En), "en_item.tsv");
        assert_eq!(EventFile::Gatya.output_name(CountryCode::Jp), "jp_gatya.tsv");

        match EventFile::from_str("sale") {
            Err(EventDataError::InvalidEventFile(name)) => assert_eq!(name, "sale"),
            other => panic!("Expected InvalidEventFile; got {:?}", other),
        }
    }
}
