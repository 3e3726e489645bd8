//! Command implementations for Orthos CLI.

use crate::checker::{CheckerConfig, SpellChecker};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::dictionary::{Dictionary, DictionaryConfig};

/// Execute a CLI command.
pub fn execute_command(args: OrthosArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_file(check_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
        Command::Lookup(lookup_args) => lookup_word(lookup_args.clone(), &args),
    }
}

/// Spell check a text file.
fn check_file(args: CheckArgs, cli_args: &OrthosArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", args.dictionary.display());
    }

    let dictionary = Dictionary::load_from_file(&args.dictionary)?;

    if cli_args.verbosity() > 1 {
        println!("Checking: {}", args.text_file.display());
    }

    let config = CheckerConfig {
        max_suggestions: args.limit,
        skip_proper_nouns: !args.include_proper_nouns,
    };
    let checker = SpellChecker::with_config(dictionary, config);
    let misspellings = checker.check_file(&args.text_file)?;

    output_result(
        "Spell check complete",
        &CheckReport {
            file: args.text_file.to_string_lossy().to_string(),
            words_flagged: misspellings.len(),
            misspellings,
        },
        cli_args,
    )?;

    Ok(())
}

/// Suggest corrections for a single word.
fn suggest_word(args: SuggestArgs, cli_args: &OrthosArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", args.dictionary.display());
    }

    let dictionary = match args.max_radius {
        Some(max_radius) => Dictionary::load_from_file_with_config(
            &args.dictionary,
            DictionaryConfig { max_radius },
        )?,
        None => Dictionary::load_from_file(&args.dictionary)?,
    };

    let suggestions = dictionary.suggest(&args.word, args.limit)?;

    output_result(
        "Suggestions found",
        &SuggestResult {
            word: args.word,
            suggestions,
        },
        cli_args,
    )?;

    Ok(())
}

/// Look up a word in a dictionary.
fn lookup_word(args: LookupArgs, cli_args: &OrthosArgs) -> Result<()> {
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let found = dictionary.contains(&args.word);

    output_result(
        "Lookup complete",
        &LookupResult {
            word: args.word,
            found,
        },
        cli_args,
    )?;

    Ok(())
}
