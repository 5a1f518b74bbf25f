use std::io::Write;

use anyhow::Context;
use countdown_core::DefinitionFinder;

use crate::cli::DefineArgs;
use crate::state::AppState;

pub fn run<W: Write>(state: &AppState, args: DefineArgs, out: &mut W) -> anyhow::Result<()> {
    let definition = if args.default {
        countdown_dcs::default_definition(&args.word)
            .context("default dictionary lookup failed")?
    } else {
        let finder = match &args.dictionary {
            Some(name) => DefinitionFinder::new(state.provider.as_ref(), name),
            None => state.definitions(),
        };
        finder.define(&args.word)
    };

    match definition {
        Some(definition) => writeln!(out, "{}: {}", args.word, definition)?,
        None => eprintln!("No definition found for {}", args.word),
    }
    Ok(())
}
