use std::path::Path;

use core_foundation::base::TCFType;
use core_foundation::string::CFString;
use core_foundation_sys::base::kCFNotFound;
use countdown_core::{DictionaryError, DictionaryProvider, LexicalDictionary};

use crate::cf;
use crate::dictionary::DcsDictionary;
use crate::sys;

/// The system's DictionaryServices
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryServices;

impl DictionaryProvider for DictionaryServices {
    fn available_dictionaries(&self) -> Result<Vec<Box<dyn LexicalDictionary>>, DictionaryError> {
        // SAFETY: takes no arguments; the array is owned and released by the helper.
        let dictionaries =
            unsafe { cf::array_under_create_rule(sys::DCSCopyAvailableDictionaries()) };
        tracing::debug!("{} dictionaries available", dictionaries.len());

        Ok(dictionaries
            .into_iter()
            .map(|dictionary| {
                Box::new(DcsDictionary::from_cf(dictionary)) as Box<dyn LexicalDictionary>
            })
            .collect())
    }

    fn open(&self, locator: &Path) -> Result<Box<dyn LexicalDictionary>, DictionaryError> {
        tracing::info!("Opening dictionary {}", locator.display());
        Ok(Box::new(DcsDictionary::create(locator)?))
    }
}

pub(crate) fn default_definition(text: &str) -> Option<String> {
    let string = CFString::new(text);
    let dictionary: sys::DCSDictionaryRef = std::ptr::null();

    // SAFETY: a null dictionary selects the user's default dictionaries.
    let range =
        unsafe { sys::DCSGetTermRangeInString(dictionary, string.as_concrete_TypeRef(), 0) };
    if range.location == kCFNotFound {
        return None;
    }

    // SAFETY: as above; `Copy` returns an owned string.
    unsafe {
        cf::string_under_create_rule(sys::DCSCopyTextDefinition(
            dictionary,
            string.as_concrete_TypeRef(),
            range,
        ))
    }
}
