use core_foundation::base::{CFType, TCFType};
use core_foundation_sys::string::CFStringRef;
use countdown_core::{DictionaryRecord, LexicalDictionary};
use countdown_types::RecordVersion;

use crate::cf;
use crate::dictionary::DcsDictionary;
use crate::sys;

/// One DictionaryServices search result
#[derive(Clone)]
pub struct DcsRecord {
    inner: CFType,
}

impl DcsRecord {
    pub(crate) fn from_cf(inner: CFType) -> Self {
        Self { inner }
    }

    pub fn as_ptr(&self) -> sys::DCSRecordRef {
        self.inner.as_CFTypeRef()
    }

    fn borrowed(&self, accessor: unsafe extern "C" fn(sys::DCSRecordRef) -> CFStringRef) -> Option<String> {
        // SAFETY: `self` keeps the record alive; `Get` accessors return borrowed strings.
        unsafe { cf::string_under_get_rule(accessor(self.as_ptr())) }
    }
}

impl DictionaryRecord for DcsRecord {
    fn headword(&self) -> Option<String> {
        self.borrowed(sys::DCSRecordGetHeadword)
    }

    fn raw_headword(&self) -> Option<String> {
        self.borrowed(sys::DCSRecordGetRawHeadword)
    }

    fn title(&self) -> Option<String> {
        self.borrowed(sys::DCSRecordGetTitle)
    }

    fn anchor(&self) -> Option<String> {
        self.borrowed(sys::DCSRecordGetAnchor)
    }

    fn associated_object(&self) -> Option<String> {
        self.borrowed(sys::DCSRecordGetAssociatedObj)
    }

    fn string(&self) -> Option<String> {
        self.borrowed(sys::DCSRecordGetString)
    }

    fn data(&self, version: RecordVersion) -> Option<String> {
        // SAFETY: valid record; `Copy` returns an owned string.
        unsafe {
            cf::string_under_create_rule(sys::DCSRecordCopyData(self.as_ptr(), version.as_raw()))
        }
    }

    fn data_url(&self) -> Option<String> {
        // SAFETY: as for `data`.
        unsafe { cf::string_under_create_rule(sys::DCSRecordCopyDataURL(self.as_ptr())) }
    }

    fn sub_dictionary(&self) -> Option<Box<dyn LexicalDictionary>> {
        // SAFETY: valid record; the sub-dictionary is borrowed and retained on wrap.
        let dictionary = unsafe {
            DcsDictionary::wrap_under_get_rule(sys::DCSRecordGetSubDictionary(self.as_ptr()))
        }?;
        Some(Box::new(dictionary))
    }
}
