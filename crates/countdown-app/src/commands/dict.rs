use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::Context;
use countdown_core::{DictionaryError, DictionaryRecord, LexicalDictionary};
use countdown_types::{DictionaryInfo, RecordSummary, RecordVersion};
use serde::Serialize;

use crate::cli::{DictCommand, LookupArgs};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecordOutput {
    #[serde(flatten)]
    pub summary: RecordSummary,
    pub format: RecordVersion,
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<BTreeMap<String, String>>,
}

pub fn run<W: Write>(state: &AppState, command: DictCommand, out: &mut W) -> anyhow::Result<()> {
    match command {
        DictCommand::List { json } => list(state, out, json),
        DictCommand::Lookup(args) => lookup(state, out, args),
        DictCommand::Open {
            path,
            lookup,
            format,
        } => {
            let dictionary = state
                .provider
                .open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            write_info(out, &dictionary.info())?;

            if let Some(text) = lookup {
                let records = records_for_text(dictionary.as_ref(), &text, format, false)?;
                write_records(out, &records)?;
            }
            Ok(())
        }
    }
}

fn list<W: Write>(state: &AppState, out: &mut W, json: bool) -> anyhow::Result<()> {
    let infos: Vec<DictionaryInfo> = state
        .provider
        .available_dictionaries()?
        .iter()
        .map(|dictionary| dictionary.info())
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &infos)?;
        writeln!(out)?;
        return Ok(());
    }
    for info in &infos {
        write_info(out, info)?;
    }
    Ok(())
}

fn lookup<W: Write>(state: &AppState, out: &mut W, args: LookupArgs) -> anyhow::Result<()> {
    let name = args
        .dictionary
        .as_deref()
        .unwrap_or(&state.config.dictionary.definition_dictionary);

    let dictionary = state
        .provider
        .dictionary_named(name, !args.exact)?
        .ok_or_else(|| DictionaryError::NotFound(name.to_string()))?;

    let records = records_for_text(dictionary.as_ref(), &args.text, args.format, args.markup)?;
    if records.is_empty() {
        eprintln!("No records for {:?} in {}", args.text, name);
        return Ok(());
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
        return Ok(());
    }
    write_records(out, &records)?;
    Ok(())
}

/// Look `text` up and snapshot every matching record
pub fn records_for_text(
    dictionary: &dyn LexicalDictionary,
    text: &str,
    format: RecordVersion,
    markup: bool,
) -> Result<Vec<RecordOutput>, DictionaryError> {
    let Some(records) = dictionary.look_up(text)? else {
        return Ok(Vec::new());
    };

    records
        .iter()
        .map(|record| -> Result<RecordOutput, DictionaryError> {
            let markup = if markup {
                markup_for(dictionary, record.as_ref())?
            } else {
                None
            };
            Ok(RecordOutput {
                summary: record.summary(),
                format,
                data: record.data(format),
                markup,
            })
        })
        .collect()
}

/// Markup is addressed by anchor, falling back to the headword
fn markup_for(
    dictionary: &dyn LexicalDictionary,
    record: &dyn DictionaryRecord,
) -> Result<Option<BTreeMap<String, String>>, DictionaryError> {
    match record.anchor().or_else(|| record.headword()) {
        Some(id) => dictionary.definition_markup(&id),
        None => Ok(None),
    }
}

fn write_info<W: Write>(out: &mut W, info: &DictionaryInfo) -> io::Result<()> {
    if info.short_name.is_empty() || info.short_name == info.name {
        writeln!(out, "{}", info.name)
    } else {
        writeln!(out, "{} ({})", info.name, info.short_name)
    }
}

fn write_records<W: Write>(out: &mut W, records: &[RecordOutput]) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let summary = &record.summary;
        let fields = [
            ("headword", &summary.headword),
            ("raw headword", &summary.raw_headword),
            ("title", &summary.title),
            ("anchor", &summary.anchor),
            ("associated object", &summary.associated_object),
            ("data url", &summary.data_url),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                writeln!(out, "{label}: {value}")?;
            }
        }
        if summary.has_sub_dictionary {
            writeln!(out, "sub-dictionary: yes")?;
        }
        if let Some(data) = &record.data {
            writeln!(out, "{}:", record.format)?;
            writeln!(out, "{data}")?;
        }
        if let Some(markup) = &record.markup {
            for (kind, value) in markup {
                writeln!(out, "markup {kind}: {value}")?;
            }
        }
    }
    Ok(())
}
