use std::collections::BTreeMap;
use std::ops::Range;
use std::path::Path;

use countdown_types::{DictionaryInfo, RecordSummary, RecordVersion};

use crate::error::DictionaryError;

/// Enumerates and opens dictionaries
pub trait DictionaryProvider {
    /// Every dictionary visible to the process, in the order the backend reports them
    fn available_dictionaries(&self) -> Result<Vec<Box<dyn LexicalDictionary>>, DictionaryError>;

    /// Load a dictionary from a resource on disk
    fn open(&self, locator: &Path) -> Result<Box<dyn LexicalDictionary>, DictionaryError>;

    /// Find a dictionary by display name
    fn dictionary_named(
        &self,
        name: &str,
        ignore_case: bool,
    ) -> Result<Option<Box<dyn LexicalDictionary>>, DictionaryError> {
        let found = self.available_dictionaries()?.into_iter().find(|dictionary| {
            dictionary.name().is_some_and(|candidate| {
                if ignore_case {
                    candidate.to_lowercase() == name.to_lowercase()
                } else {
                    candidate == name
                }
            })
        });
        Ok(found)
    }
}

/// A loaded dictionary
pub trait LexicalDictionary {
    /// Display name
    fn name(&self) -> Option<String>;

    fn short_name(&self) -> Option<String>;

    /// Byte range of the first term the dictionary recognises in `text`, starting at `offset`
    fn term_range(&self, text: &str, offset: usize) -> Option<Range<usize>>;

    /// Records matching a search string
    fn records_for(&self, term: &str) -> Result<Vec<Box<dyn DictionaryRecord>>, DictionaryError>;

    /// Definition markup of a record, keyed by markup kind
    fn definition_markup(
        &self,
        record: &str,
    ) -> Result<Option<BTreeMap<String, String>>, DictionaryError>;

    fn info(&self) -> DictionaryInfo {
        DictionaryInfo {
            name: self.name().unwrap_or_default(),
            short_name: self.short_name().unwrap_or_default(),
        }
    }

    /// Isolate the term in `text` and search for it.
    ///
    /// Returns `Ok(None)` when the dictionary recognises no term at all.
    fn look_up(
        &self,
        text: &str,
    ) -> Result<Option<Vec<Box<dyn DictionaryRecord>>>, DictionaryError> {
        let Some(range) = self.term_range(text, 0) else {
            tracing::debug!("No term found in {:?}", text);
            return Ok(None);
        };
        let Some(term) = text.get(range) else {
            return Ok(None);
        };
        self.records_for(term).map(Some)
    }
}

/// One lookup result
pub trait DictionaryRecord {
    /// Display headword
    fn headword(&self) -> Option<String>;

    /// Headword before normalization
    fn raw_headword(&self) -> Option<String>;

    fn title(&self) -> Option<String>;

    /// Anchor fragment identifying the record inside its dictionary
    fn anchor(&self) -> Option<String>;

    fn associated_object(&self) -> Option<String>;

    /// Full record text
    fn string(&self) -> Option<String>;

    /// Record content in the requested format
    fn data(&self, version: RecordVersion) -> Option<String>;

    fn data_url(&self) -> Option<String>;

    /// Dictionary this record aggregates, if any
    fn sub_dictionary(&self) -> Option<Box<dyn LexicalDictionary>>;

    fn text(&self) -> Option<String> {
        self.data(RecordVersion::Text)
    }

    fn html(&self) -> Option<String> {
        self.data(RecordVersion::Html)
    }

    fn summary(&self) -> RecordSummary {
        RecordSummary {
            headword: self.headword(),
            raw_headword: self.raw_headword(),
            title: self.title(),
            anchor: self.anchor(),
            associated_object: self.associated_object(),
            string: self.string(),
            data_url: self.data_url(),
            has_sub_dictionary: self.sub_dictionary().is_some(),
        }
    }
}

/// Converts a UTF-16 range (as CoreFoundation reports it) into a byte range of `text`
pub fn utf16_range_to_bytes(text: &str, location: usize, length: usize) -> Option<Range<usize>> {
    let end_unit = location.checked_add(length)?;
    let mut units = 0usize;
    let mut start = None;

    for (byte, ch) in text.char_indices() {
        if units == location {
            start = Some(byte);
        }
        if units == end_unit {
            return start.map(|s| s..byte);
        }
        units += ch.len_utf16();
    }

    if units == location {
        start = Some(text.len());
    }
    if units == end_unit {
        return start.map(|s| s..text.len());
    }
    None
}

/// Converts a byte offset of `text` into a UTF-16 offset
pub fn byte_offset_to_utf16(text: &str, offset: usize) -> Option<usize> {
    let prefix = text.get(..offset)?;
    Some(prefix.encode_utf16().count())
}
