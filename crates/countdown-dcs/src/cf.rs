use std::collections::BTreeMap;
use std::ffi::c_void;

use core_foundation::array::CFArray;
use core_foundation::base::{CFType, TCFType};
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::CFString;
use core_foundation_sys::array::CFArrayRef;
use core_foundation_sys::base::CFTypeRef;
use core_foundation_sys::dictionary::CFDictionaryRef;
use core_foundation_sys::string::CFStringRef;

/// # Safety
/// `string` must be null or a valid `CFStringRef` the caller does not own.
pub(crate) unsafe fn string_under_get_rule(string: CFStringRef) -> Option<String> {
    if string.is_null() {
        return None;
    }
    // SAFETY: non-null and valid per the caller; the wrapper retains it.
    Some(unsafe { CFString::wrap_under_get_rule(string) }.to_string())
}

/// # Safety
/// `string` must be null or a valid `CFStringRef` owned by the caller.
pub(crate) unsafe fn string_under_create_rule(string: CFStringRef) -> Option<String> {
    if string.is_null() {
        return None;
    }
    // SAFETY: non-null and owned; the wrapper takes over the release.
    Some(unsafe { CFString::wrap_under_create_rule(string) }.to_string())
}

/// Retained copies of every element of an owned array
///
/// # Safety
/// `array` must be null or a valid `CFArrayRef` owned by the caller.
pub(crate) unsafe fn array_under_create_rule(array: CFArrayRef) -> Vec<CFType> {
    if array.is_null() {
        return Vec::new();
    }
    // SAFETY: non-null and owned; the array is released when dropped.
    let array: CFArray<*const c_void> = unsafe { CFArray::wrap_under_create_rule(array) };
    array
        .get_all_values()
        .into_iter()
        .filter(|value| !value.is_null())
        // SAFETY: elements stay alive while `array` holds them; each is retained here.
        .map(|value| unsafe { CFType::wrap_under_get_rule(value as CFTypeRef) })
        .collect()
}

/// String rendering of an owned dictionary; keys and values that are not
/// strings use their CoreFoundation description
///
/// # Safety
/// `dictionary` must be null or a valid `CFDictionaryRef` owned by the caller.
pub(crate) unsafe fn dictionary_under_create_rule(
    dictionary: CFDictionaryRef,
) -> Option<BTreeMap<String, String>> {
    if dictionary.is_null() {
        return None;
    }
    // SAFETY: non-null and owned; released when dropped.
    let dictionary: CFDictionary<*const c_void, *const c_void> =
        unsafe { CFDictionary::wrap_under_create_rule(dictionary) };
    let (keys, values) = dictionary.get_keys_and_values();

    let markup = keys
        .into_iter()
        .zip(values)
        .filter(|(key, value)| !key.is_null() && !value.is_null())
        .map(|(key, value)| {
            // SAFETY: both are live members of `dictionary` and get retained.
            let (key, value) = unsafe {
                (
                    CFType::wrap_under_get_rule(key as CFTypeRef),
                    CFType::wrap_under_get_rule(value as CFTypeRef),
                )
            };
            (describe(&key), describe(&value))
        })
        .collect();
    Some(markup)
}

fn describe(value: &CFType) -> String {
    value
        .downcast::<CFString>()
        .map(|string| string.to_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use core_foundation::number::CFNumber;

    use super::*;

    #[test]
    fn test_null_conversions() {
        // SAFETY: null is accepted by every helper.
        unsafe {
            assert_eq!(string_under_get_rule(std::ptr::null()), None);
            assert_eq!(string_under_create_rule(std::ptr::null()), None);
            assert!(array_under_create_rule(std::ptr::null()).is_empty());
            assert!(dictionary_under_create_rule(std::ptr::null()).is_none());
        }
    }

    #[test]
    fn test_string_round_trip() {
        let string = CFString::new("bird");
        // SAFETY: `string` outlives the call and keeps its own reference.
        let converted = unsafe { string_under_get_rule(string.as_concrete_TypeRef()) };
        assert_eq!(converted.as_deref(), Some("bird"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&CFString::new("html").as_CFType()), "html");
        assert!(!describe(&CFNumber::from(3i32).as_CFType()).is_empty());
    }
}
