pub mod types;

pub use types::{DictionaryInfo, RecordSummary, RecordVersion, UnknownRecordVersion};
