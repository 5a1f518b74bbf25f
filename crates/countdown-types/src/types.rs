use std::ffi::c_long;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format of a dictionary record.
///
/// The discriminants are the raw values the framework expects in
/// `DCSRecordCopyData`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u32)]
pub enum RecordVersion {
    Html = 0,
    HtmlWithAppCss = 1,
    HtmlWithPopoverCss = 2,
    #[default]
    Text = 3,
}

impl RecordVersion {
    pub const ALL: [RecordVersion; 4] = [
        RecordVersion::Html,
        RecordVersion::HtmlWithAppCss,
        RecordVersion::HtmlWithPopoverCss,
        RecordVersion::Text,
    ];

    /// Raw `long` passed across the FFI boundary
    pub const fn as_raw(self) -> c_long {
        self as u32 as c_long
    }

    pub const fn is_html(self) -> bool {
        !matches!(self, RecordVersion::Text)
    }

    pub const fn name(self) -> &'static str {
        match self {
            RecordVersion::Html => "html",
            RecordVersion::HtmlWithAppCss => "html-with-app-css",
            RecordVersion::HtmlWithPopoverCss => "html-with-popover-css",
            RecordVersion::Text => "text",
        }
    }
}

impl fmt::Display for RecordVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown record version: {0}")]
pub struct UnknownRecordVersion(pub String);

impl TryFrom<c_long> for RecordVersion {
    type Error = UnknownRecordVersion;

    fn try_from(raw: c_long) -> Result<Self, Self::Error> {
        RecordVersion::ALL
            .into_iter()
            .find(|version| version.as_raw() == raw)
            .ok_or_else(|| UnknownRecordVersion(raw.to_string()))
    }
}

impl FromStr for RecordVersion {
    type Err = UnknownRecordVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        RecordVersion::ALL
            .into_iter()
            .find(|version| version.name() == needle)
            .ok_or_else(|| UnknownRecordVersion(s.to_string()))
    }
}

/// Names a dictionary reports about itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryInfo {
    pub name: String,
    pub short_name: String,
}

/// Snapshot of every string accessor of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub headword: Option<String>,
    pub raw_headword: Option<String>,
    pub title: Option<String>,
    pub anchor: Option<String>,
    pub associated_object: Option<String>,
    pub string: Option<String>,
    pub data_url: Option<String>,
    pub has_sub_dictionary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_version_raw_values() {
        assert_eq!(RecordVersion::Html.as_raw(), 0);
        assert_eq!(RecordVersion::HtmlWithAppCss.as_raw(), 1);
        assert_eq!(RecordVersion::HtmlWithPopoverCss.as_raw(), 2);
        assert_eq!(RecordVersion::Text.as_raw(), 3);
    }

    #[test]
    fn test_record_version_from_raw() {
        assert_eq!(RecordVersion::try_from(2), Ok(RecordVersion::HtmlWithPopoverCss));
        assert!(RecordVersion::try_from(4).is_err());
        assert!(RecordVersion::try_from(-1).is_err());
    }

    #[test]
    fn test_record_version_parse() {
        assert_eq!("HTML".parse::<RecordVersion>(), Ok(RecordVersion::Html));
        assert_eq!(" text ".parse::<RecordVersion>(), Ok(RecordVersion::Text));
        assert_eq!(
            "html-with-app-css".parse::<RecordVersion>(),
            Ok(RecordVersion::HtmlWithAppCss)
        );
        assert!("markdown".parse::<RecordVersion>().is_err());
    }

    #[test]
    fn test_record_version_serde_names() {
        let json = serde_json::to_string(&RecordVersion::HtmlWithPopoverCss).unwrap();
        assert_eq!(json, "\"html-with-popover-css\"");
        assert!(RecordVersion::Html.is_html());
        assert!(!RecordVersion::Text.is_html());
    }
}
