//! DictionaryServices bindings.
//!
//! [`sys`] declares the framework functions as they are exported. The safe
//! wrappers ([`DcsDictionary`], [`DcsRecord`], [`DictionaryServices`])
//! implement the `countdown-core` dictionary traits. Everything except
//! [`system_provider`] and [`default_definition`] exists on macOS only.

use countdown_core::{DictionaryError, DictionaryProvider};

#[cfg(target_os = "macos")]
mod cf;
#[cfg(target_os = "macos")]
mod dictionary;
#[cfg(target_os = "macos")]
mod record;
#[cfg(target_os = "macos")]
mod services;
#[cfg(target_os = "macos")]
pub mod sys;

#[cfg(target_os = "macos")]
pub use dictionary::DcsDictionary;
#[cfg(target_os = "macos")]
pub use record::DcsRecord;
#[cfg(target_os = "macos")]
pub use services::DictionaryServices;

/// The dictionaries installed on this machine
pub fn system_provider() -> Result<Box<dyn DictionaryProvider>, DictionaryError> {
    #[cfg(target_os = "macos")]
    {
        Ok(Box::new(DictionaryServices))
    }

    #[cfg(not(target_os = "macos"))]
    {
        Err(DictionaryError::Unsupported(std::env::consts::OS))
    }
}

/// Plain-text definition of the first term in `text`, from the user's default dictionaries
pub fn default_definition(text: &str) -> Result<Option<String>, DictionaryError> {
    #[cfg(target_os = "macos")]
    {
        Ok(services::default_definition(text))
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = text;
        Err(DictionaryError::Unsupported(std::env::consts::OS))
    }
}

#[cfg(all(test, not(target_os = "macos")))]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform() {
        assert!(matches!(
            system_provider(),
            Err(DictionaryError::Unsupported(_))
        ));
        assert!(matches!(
            default_definition("bird"),
            Err(DictionaryError::Unsupported(_))
        ));
    }
}
