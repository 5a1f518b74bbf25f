use std::collections::{BTreeMap, HashMap};
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use countdown_types::RecordVersion;
use serde::{Deserialize, Serialize};

use crate::dictionary::{DictionaryProvider, DictionaryRecord, LexicalDictionary};
use crate::error::DictionaryError;
use crate::preprocess::normalize_term;

// JSON structures of a definitions file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryDictionarySpec {
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub entries: Vec<MemoryEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub headword: String,
    #[serde(default)]
    pub raw_headword: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(default)]
    pub associated_object: Option<String>,
    /// Plain text definition
    #[serde(default)]
    pub text: Option<String>,
    /// HTML definition, served for every HTML record version
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub data_url: Option<String>,
    #[serde(default)]
    pub sub_dictionary: Option<MemoryDictionarySpec>,
}

struct MemoryInner {
    name: String,
    short_name: Option<String>,
    entries: Vec<MemoryEntry>,
    headword_index: HashMap<String, Vec<usize>>,
}

/// Dictionary held entirely in memory, loaded from JSON definition files
#[derive(Clone)]
pub struct MemoryDictionary {
    inner: Arc<MemoryInner>,
}

impl MemoryDictionary {
    pub fn from_spec(spec: MemoryDictionarySpec) -> Self {
        let mut headword_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, entry) in spec.entries.iter().enumerate() {
            headword_index
                .entry(normalize_term(&entry.headword))
                .or_default()
                .push(idx);
        }

        Self {
            inner: Arc::new(MemoryInner {
                name: spec.name,
                short_name: spec.short_name,
                entries: spec.entries,
                headword_index,
            }),
        }
    }

    /// Load from a JSON string
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let spec: MemoryDictionarySpec = serde_json::from_str(json)?;
        if spec.name.trim().is_empty() {
            return Err(DictionaryError::InvalidFormat(
                "dictionary name must not be empty".to_string(),
            ));
        }
        Ok(Self::from_spec(spec))
    }

    /// Load from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, DictionaryError> {
        tracing::info!("Loading definitions from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dictionary = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} entries into {}",
            dictionary.entry_count(),
            dictionary.inner.name
        );
        Ok(dictionary)
    }

    pub fn entry_count(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn spec(&self) -> MemoryDictionarySpec {
        MemoryDictionarySpec {
            name: self.inner.name.clone(),
            short_name: self.inner.short_name.clone(),
            entries: self.inner.entries.clone(),
        }
    }

    /// Merge another dictionary into this one.
    /// Entries of `other` replace entries with the same normalized headword.
    pub fn merge(self, other: MemoryDictionary) -> Self {
        let mut spec = self.spec();
        let incoming = other.spec();

        for entry in incoming.entries {
            let key = normalize_term(&entry.headword);
            spec.entries.retain(|e| normalize_term(&e.headword) != key);
            spec.entries.push(entry);
        }
        if spec.short_name.is_none() {
            spec.short_name = incoming.short_name;
        }

        Self::from_spec(spec)
    }

    fn record(&self, index: usize) -> Box<dyn DictionaryRecord> {
        Box::new(MemoryRecord {
            dictionary: self.clone(),
            index,
        })
    }

    fn entry_for_id(&self, id: &str) -> Option<&MemoryEntry> {
        let key = normalize_term(id);
        self.inner
            .entries
            .iter()
            .find(|e| e.anchor.as_deref() == Some(id))
            .or_else(|| {
                self.inner
                    .headword_index
                    .get(&key)
                    .and_then(|indices| indices.first())
                    .and_then(|&idx| self.inner.entries.get(idx))
            })
    }
}

impl LexicalDictionary for MemoryDictionary {
    fn name(&self) -> Option<String> {
        Some(self.inner.name.clone())
    }

    fn short_name(&self) -> Option<String> {
        Some(
            self.inner
                .short_name
                .clone()
                .unwrap_or_else(|| self.inner.name.clone()),
        )
    }

    fn term_range(&self, text: &str, offset: usize) -> Option<Range<usize>> {
        let rest = text.get(offset..)?;

        // Multi-word headwords match the whole (trimmed) text
        let trimmed = rest.trim();
        if !trimmed.is_empty() && self.inner.headword_index.contains_key(&normalize_term(trimmed)) {
            let start = offset + (rest.len() - rest.trim_start().len());
            return Some(start..start + trimmed.len());
        }

        let mut start = None;
        for (idx, ch) in rest.char_indices().chain(std::iter::once((rest.len(), ' '))) {
            let is_word_char = ch.is_alphanumeric() || ch == '-' || ch == '\'';
            match (start, is_word_char) {
                (None, true) => start = Some(idx),
                (Some(s), false) => {
                    if self.inner.headword_index.contains_key(&normalize_term(&rest[s..idx])) {
                        return Some(offset + s..offset + idx);
                    }
                    start = None;
                }
                _ => {}
            }
        }
        None
    }

    fn records_for(&self, term: &str) -> Result<Vec<Box<dyn DictionaryRecord>>, DictionaryError> {
        let records = self
            .inner
            .headword_index
            .get(&normalize_term(term))
            .map(|indices| indices.iter().map(|&idx| self.record(idx)).collect())
            .unwrap_or_default();
        Ok(records)
    }

    fn definition_markup(
        &self,
        record: &str,
    ) -> Result<Option<BTreeMap<String, String>>, DictionaryError> {
        let Some(entry) = self.entry_for_id(record) else {
            return Ok(None);
        };

        let mut markup = BTreeMap::new();
        markup.insert("headword".to_string(), entry.headword.clone());
        let optional = [
            ("title", &entry.title),
            ("anchor", &entry.anchor),
            ("html", &entry.html),
            ("text", &entry.text),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                markup.insert(key.to_string(), value.clone());
            }
        }
        Ok(Some(markup))
    }
}

struct MemoryRecord {
    dictionary: MemoryDictionary,
    index: usize,
}

impl MemoryRecord {
    fn entry(&self) -> Option<&MemoryEntry> {
        self.dictionary.inner.entries.get(self.index)
    }
}

impl DictionaryRecord for MemoryRecord {
    fn headword(&self) -> Option<String> {
        self.entry().map(|e| e.headword.clone())
    }

    fn raw_headword(&self) -> Option<String> {
        self.entry()
            .map(|e| e.raw_headword.clone().unwrap_or_else(|| e.headword.clone()))
    }

    fn title(&self) -> Option<String> {
        self.entry()
            .map(|e| e.title.clone().unwrap_or_else(|| e.headword.clone()))
    }

    fn anchor(&self) -> Option<String> {
        self.entry().and_then(|e| e.anchor.clone())
    }

    fn associated_object(&self) -> Option<String> {
        self.entry().and_then(|e| e.associated_object.clone())
    }

    fn string(&self) -> Option<String> {
        self.entry().and_then(|e| e.text.clone())
    }

    fn data(&self, version: RecordVersion) -> Option<String> {
        let entry = self.entry()?;
        if version.is_html() {
            entry.html.clone()
        } else {
            entry.text.clone()
        }
    }

    fn data_url(&self) -> Option<String> {
        self.entry().and_then(|e| e.data_url.clone())
    }

    fn sub_dictionary(&self) -> Option<Box<dyn LexicalDictionary>> {
        let spec = self.entry()?.sub_dictionary.clone()?;
        Some(Box::new(MemoryDictionary::from_spec(spec)))
    }
}

/// Provider over a fixed set of in-memory dictionaries
#[derive(Clone, Default)]
pub struct MemoryProvider {
    dictionaries: Vec<MemoryDictionary>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dictionary, merging it into an existing one with the same name
    pub fn add(&mut self, dictionary: MemoryDictionary) {
        let position = self
            .dictionaries
            .iter()
            .position(|d| d.inner.name == dictionary.inner.name);

        match position {
            Some(idx) => {
                tracing::info!("Merging additional definitions into {}", dictionary.inner.name);
                let existing = self.dictionaries.remove(idx);
                self.dictionaries.insert(idx, existing.merge(dictionary));
            }
            None => self.dictionaries.push(dictionary),
        }
    }

    /// Load every file, skipping (and logging) the ones that fail
    pub fn load_files(paths: &[String]) -> Self {
        let mut provider = Self::new();
        for path in paths {
            match MemoryDictionary::load_from_file(Path::new(path)) {
                Ok(dictionary) => provider.add(dictionary),
                Err(e) => tracing::warn!("Failed to load definitions from {}: {}", path, e),
            }
        }
        provider
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }
}

impl DictionaryProvider for MemoryProvider {
    fn available_dictionaries(&self) -> Result<Vec<Box<dyn LexicalDictionary>>, DictionaryError> {
        Ok(self
            .dictionaries
            .iter()
            .map(|d| Box::new(d.clone()) as Box<dyn LexicalDictionary>)
            .collect())
    }

    fn open(&self, locator: &Path) -> Result<Box<dyn LexicalDictionary>, DictionaryError> {
        if !locator.exists() {
            return Err(DictionaryError::CreateFailed(locator.display().to_string()));
        }
        Ok(Box::new(MemoryDictionary::load_from_file(locator)?))
    }
}
