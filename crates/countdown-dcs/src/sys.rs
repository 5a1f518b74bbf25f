//! Raw declarations of the DictionaryServices functions.
//!
//! Ownership follows the CoreFoundation naming rule: `Create`/`Copy`
//! results are owned by the caller and must be released, `Get` results are
//! borrowed from their argument.
#![allow(non_camel_case_types, non_upper_case_globals)]

use std::ffi::{c_long, c_void};

use core_foundation_sys::array::CFArrayRef;
use core_foundation_sys::base::{CFIndex, CFRange, CFTypeRef};
use core_foundation_sys::dictionary::CFDictionaryRef;
use core_foundation_sys::string::CFStringRef;
use core_foundation_sys::url::CFURLRef;

#[repr(C)]
pub struct __DCSDictionary {
    _private: [u8; 0],
}

/// Opaque dictionary handle
pub type DCSDictionaryRef = *const __DCSDictionary;

/// Records are untyped CoreFoundation objects
pub type DCSRecordRef = CFTypeRef;

pub const DCSRecordVersionHTML: c_long = 0;
pub const DCSRecordVersionHTMLWithAppCSS: c_long = 1;
pub const DCSRecordVersionHTMLWithPopoverCSS: c_long = 2;
pub const DCSRecordVersionText: c_long = 3;

#[link(name = "CoreServices", kind = "framework")]
unsafe extern "C" {
    pub fn DCSDictionaryCreate(url: CFURLRef) -> DCSDictionaryRef;
    pub fn DCSRecordGetSubDictionary(record: DCSRecordRef) -> DCSDictionaryRef;
    pub fn DCSCopyDefinitionMarkup(
        dictionary: DCSDictionaryRef,
        record: CFStringRef,
    ) -> CFDictionaryRef;
    pub fn DCSDictionaryGetName(dictionary: DCSDictionaryRef) -> CFStringRef;
    pub fn DCSDictionaryGetShortName(dictionary: DCSDictionaryRef) -> CFStringRef;
    pub fn DCSCopyAvailableDictionaries() -> CFArrayRef;
    /// The two trailing pointers are undocumented; callers pass null
    pub fn DCSCopyRecordsForSearchString(
        dictionary: DCSDictionaryRef,
        string: CFStringRef,
        unknown1: *mut c_void,
        unknown2: *mut c_void,
    ) -> CFArrayRef;
    pub fn DCSRecordCopyData(record: DCSRecordRef, version: c_long) -> CFStringRef;
    pub fn DCSRecordCopyDataURL(record: DCSRecordRef) -> CFStringRef;
    pub fn DCSRecordGetAnchor(record: DCSRecordRef) -> CFStringRef;
    pub fn DCSRecordGetAssociatedObj(record: DCSRecordRef) -> CFStringRef;
    pub fn DCSRecordGetHeadword(record: DCSRecordRef) -> CFStringRef;
    pub fn DCSRecordGetRawHeadword(record: DCSRecordRef) -> CFStringRef;
    pub fn DCSRecordGetString(record: DCSRecordRef) -> CFStringRef;
    pub fn DCSRecordGetTitle(record: DCSRecordRef) -> CFStringRef;

    // Public API of the same framework
    pub fn DCSGetTermRangeInString(
        dictionary: DCSDictionaryRef,
        text: CFStringRef,
        offset: CFIndex,
    ) -> CFRange;
    pub fn DCSCopyTextDefinition(
        dictionary: DCSDictionaryRef,
        text: CFStringRef,
        range: CFRange,
    ) -> CFStringRef;
}

#[cfg(test)]
mod tests {
    use countdown_types::RecordVersion;

    use super::*;

    #[test]
    fn test_record_version_constants_match() {
        assert_eq!(RecordVersion::Html.as_raw(), DCSRecordVersionHTML);
        assert_eq!(RecordVersion::HtmlWithAppCss.as_raw(), DCSRecordVersionHTMLWithAppCSS);
        assert_eq!(
            RecordVersion::HtmlWithPopoverCss.as_raw(),
            DCSRecordVersionHTMLWithPopoverCSS
        );
        assert_eq!(RecordVersion::Text.as_raw(), DCSRecordVersionText);
    }

    #[test]
    fn test_signatures() {
        let _: unsafe extern "C" fn(CFURLRef) -> DCSDictionaryRef = DCSDictionaryCreate;
        let _: unsafe extern "C" fn(DCSRecordRef) -> DCSDictionaryRef = DCSRecordGetSubDictionary;
        let _: unsafe extern "C" fn(DCSDictionaryRef, CFStringRef) -> CFDictionaryRef =
            DCSCopyDefinitionMarkup;
        let _: unsafe extern "C" fn(DCSDictionaryRef) -> CFStringRef = DCSDictionaryGetName;
        let _: unsafe extern "C" fn(DCSDictionaryRef) -> CFStringRef = DCSDictionaryGetShortName;
        let _: unsafe extern "C" fn() -> CFArrayRef = DCSCopyAvailableDictionaries;
        let _: unsafe extern "C" fn(
            DCSDictionaryRef,
            CFStringRef,
            *mut c_void,
            *mut c_void,
        ) -> CFArrayRef = DCSCopyRecordsForSearchString;
        let _: unsafe extern "C" fn(DCSRecordRef, c_long) -> CFStringRef = DCSRecordCopyData;
        let _: unsafe extern "C" fn(DCSRecordRef) -> CFStringRef = DCSRecordCopyDataURL;
        let _: unsafe extern "C" fn(DCSRecordRef) -> CFStringRef = DCSRecordGetAnchor;
        let _: unsafe extern "C" fn(DCSRecordRef) -> CFStringRef = DCSRecordGetAssociatedObj;
        let _: unsafe extern "C" fn(DCSRecordRef) -> CFStringRef = DCSRecordGetHeadword;
        let _: unsafe extern "C" fn(DCSRecordRef) -> CFStringRef = DCSRecordGetRawHeadword;
        let _: unsafe extern "C" fn(DCSRecordRef) -> CFStringRef = DCSRecordGetString;
        let _: unsafe extern "C" fn(DCSRecordRef) -> CFStringRef = DCSRecordGetTitle;
    }
}
