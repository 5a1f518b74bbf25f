use std::collections::BTreeMap;
use std::ops::Range;
use std::path::Path;

use core_foundation::base::{CFType, TCFType};
use core_foundation::string::CFString;
use core_foundation::url::CFURL;
use core_foundation_sys::base::{CFIndex, CFTypeRef, kCFNotFound};
use countdown_core::dictionary::{byte_offset_to_utf16, utf16_range_to_bytes};
use countdown_core::{DictionaryError, DictionaryRecord, LexicalDictionary};

use crate::cf;
use crate::record::DcsRecord;
use crate::sys;

/// A dictionary loaded by DictionaryServices
#[derive(Clone)]
pub struct DcsDictionary {
    inner: CFType,
}

impl DcsDictionary {
    /// # Safety
    /// `dictionary` must be null or a valid dictionary reference the caller does not own.
    pub(crate) unsafe fn wrap_under_get_rule(dictionary: sys::DCSDictionaryRef) -> Option<Self> {
        if dictionary.is_null() {
            return None;
        }
        // SAFETY: non-null and valid per the caller.
        let inner = unsafe { CFType::wrap_under_get_rule(dictionary as CFTypeRef) };
        Some(Self { inner })
    }

    /// # Safety
    /// `dictionary` must be null or a valid dictionary reference owned by the caller.
    pub(crate) unsafe fn wrap_under_create_rule(dictionary: sys::DCSDictionaryRef) -> Option<Self> {
        if dictionary.is_null() {
            return None;
        }
        // SAFETY: non-null and owned; released on drop.
        let inner = unsafe { CFType::wrap_under_create_rule(dictionary as CFTypeRef) };
        Some(Self { inner })
    }

    pub(crate) fn from_cf(inner: CFType) -> Self {
        Self { inner }
    }

    /// Load a dictionary bundle from disk
    pub fn create(path: &Path) -> Result<Self, DictionaryError> {
        let url = CFURL::from_path(path, path.is_dir())
            .ok_or_else(|| DictionaryError::CreateFailed(path.display().to_string()))?;

        // SAFETY: `url` is valid for the call; the result is owned.
        let dictionary = unsafe {
            Self::wrap_under_create_rule(sys::DCSDictionaryCreate(url.as_concrete_TypeRef()))
        };
        dictionary.ok_or_else(|| DictionaryError::CreateFailed(path.display().to_string()))
    }

    pub fn as_ptr(&self) -> sys::DCSDictionaryRef {
        self.inner.as_CFTypeRef() as sys::DCSDictionaryRef
    }
}

impl LexicalDictionary for DcsDictionary {
    fn name(&self) -> Option<String> {
        // SAFETY: `self` keeps the dictionary alive; the name is borrowed.
        unsafe { cf::string_under_get_rule(sys::DCSDictionaryGetName(self.as_ptr())) }
    }

    fn short_name(&self) -> Option<String> {
        // SAFETY: as for `name`.
        unsafe { cf::string_under_get_rule(sys::DCSDictionaryGetShortName(self.as_ptr())) }
    }

    fn term_range(&self, text: &str, offset: usize) -> Option<Range<usize>> {
        let offset = CFIndex::try_from(byte_offset_to_utf16(text, offset)?).ok()?;
        let string = CFString::new(text);

        // SAFETY: both references are valid for the call.
        let range = unsafe {
            sys::DCSGetTermRangeInString(self.as_ptr(), string.as_concrete_TypeRef(), offset)
        };
        if range.location == kCFNotFound || range.location < 0 || range.length < 0 {
            return None;
        }
        utf16_range_to_bytes(text, range.location as usize, range.length as usize)
    }

    fn records_for(&self, term: &str) -> Result<Vec<Box<dyn DictionaryRecord>>, DictionaryError> {
        let string = CFString::new(term);

        // SAFETY: valid references; the array is owned and released by the helper.
        let records = unsafe {
            cf::array_under_create_rule(sys::DCSCopyRecordsForSearchString(
                self.as_ptr(),
                string.as_concrete_TypeRef(),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
            ))
        };
        tracing::debug!("{} records for {:?}", records.len(), term);

        Ok(records
            .into_iter()
            .map(|record| Box::new(DcsRecord::from_cf(record)) as Box<dyn DictionaryRecord>)
            .collect())
    }

    fn definition_markup(
        &self,
        record: &str,
    ) -> Result<Option<BTreeMap<String, String>>, DictionaryError> {
        let string = CFString::new(record);

        // SAFETY: valid references; the markup dictionary is owned.
        let markup = unsafe {
            cf::dictionary_under_create_rule(sys::DCSCopyDefinitionMarkup(
                self.as_ptr(),
                string.as_concrete_TypeRef(),
            ))
        };
        Ok(markup)
    }
}
