//! Spell checking engine for Orthos.
//!
//! Combines the dictionary with the line scanner and reporting helpers:
//! candidate words are extracted line by line, checked against the
//! dictionary, and flagged words come back with context and suggestions.

pub mod report;
pub mod scanner;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::checker::report::{Misspelling, extract_context};
use crate::checker::scanner::{WordOccurrence, scan_line};
use crate::error::Result;
use crate::spelling::dictionary::Dictionary;

/// Configuration for the spell checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Maximum number of suggestions attached to each flagged word.
    pub max_suggestions: usize,
    /// Whether capitalized words mid-sentence are accepted as proper nouns.
    pub skip_proper_nouns: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            max_suggestions: 5,
            skip_proper_nouns: true,
        }
    }
}

/// Spell checker over a loaded dictionary.
///
/// # Examples
///
/// ```
/// use orthos::checker::SpellChecker;
/// use orthos::spelling::dictionary::Dictionary;
///
/// let dictionary = Dictionary::from_words(["the", "cat", "sat"]);
/// let checker = SpellChecker::new(dictionary);
///
/// let findings = checker.check_text("the cta sat.").unwrap();
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].word, "cta");
/// assert_eq!(findings[0].suggestions[0], "cat");
/// ```
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Dictionary,
    config: CheckerConfig,
}

impl SpellChecker {
    /// Create a checker with default configuration.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_config(dictionary, CheckerConfig::default())
    }

    /// Create a checker with custom configuration.
    pub fn with_config(dictionary: Dictionary, config: CheckerConfig) -> Self {
        SpellChecker { dictionary, config }
    }

    /// The dictionary backing this checker.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Whether an occurrence passes the check.
    ///
    /// Unknown words are still accepted when they look like proper nouns:
    /// capitalized and not at the start of a sentence.
    fn is_acceptable(&self, word: &WordOccurrence) -> bool {
        if self.dictionary.contains(&word.text) {
            return true;
        }
        self.config.skip_proper_nouns && word.capitalized && !word.sentence_start
    }

    /// Spell check a block of text, returning flagged words in document order.
    pub fn check_text(&self, text: &str) -> Result<Vec<Misspelling>> {
        let mut findings = Vec::new();
        let mut sentence_start = true;

        for (index, line) in text.lines().enumerate() {
            sentence_start = self.check_line(line, index + 1, sentence_start, &mut findings)?;
        }

        Ok(findings)
    }

    /// Spell check a file line by line.
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Misspelling>> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut findings = Vec::new();
        let mut sentence_start = true;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            sentence_start = self.check_line(&line, index + 1, sentence_start, &mut findings)?;
        }

        debug!(
            "checked {}: {} words flagged",
            path.as_ref().display(),
            findings.len()
        );

        Ok(findings)
    }

    /// Check one line, appending findings; returns the sentence-start
    /// carry for the next line.
    fn check_line(
        &self,
        line: &str,
        line_number: usize,
        sentence_start: bool,
        findings: &mut Vec<Misspelling>,
    ) -> Result<bool> {
        let (words, carry) = scan_line(line, line_number, sentence_start);

        for word in words {
            if self.is_acceptable(&word) {
                continue;
            }

            let suggestions = self
                .dictionary
                .suggest(&word.text, self.config.max_suggestions)?;

            findings.push(Misspelling {
                context: extract_context(line, word.column, word.end_column()),
                word: word.text,
                line: word.line,
                column: word.column,
                suggestions,
            });
        }

        Ok(carry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> SpellChecker {
        let dictionary = Dictionary::from_words([
            "the", "cat", "sat", "on", "a", "mat", "in", "paris", "and", "slept", "is", "far",
        ]);
        SpellChecker::new(dictionary)
    }

    #[test]
    fn test_clean_text_has_no_findings() {
        let findings = checker().check_text("the cat sat on a mat.").unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn test_misspelling_is_flagged_with_location() {
        let findings = checker().check_text("the cta sat.").unwrap();
        assert_eq!(findings.len(), 1);

        let finding = &findings[0];
        assert_eq!(finding.word, "cta");
        assert_eq!(finding.line, 1);
        assert_eq!(finding.column, 4);
        assert_eq!(finding.context, "the 'cta' sat.");
        assert_eq!(finding.suggestions[0], "cat");
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let findings = checker().check_text("the cat sat.\nthe czt slept.").unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
    }

    #[test]
    fn test_proper_noun_mid_sentence_is_skipped() {
        // "Whiskers" is unknown but capitalized mid-sentence.
        let findings = checker().check_text("the cat Whiskers sat.").unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn test_capitalized_sentence_start_is_checked() {
        let findings = checker().check_text("Czt sat on a mat.").unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].word, "czt");
    }

    #[test]
    fn test_proper_noun_skip_can_be_disabled() {
        let config = CheckerConfig {
            skip_proper_nouns: false,
            ..Default::default()
        };
        let dictionary = Dictionary::from_words(["the", "cat", "sat"]);
        let checker = SpellChecker::with_config(dictionary, config);

        let findings = checker.check_text("the cat Whiskers sat.").unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].word, "whiskers");
    }

    #[test]
    fn test_suggestion_limit_is_respected() {
        let config = CheckerConfig {
            max_suggestions: 2,
            ..Default::default()
        };
        let dictionary = Dictionary::from_words(["cat", "bat", "rat", "mat", "hat"]);
        let checker = SpellChecker::with_config(dictionary, config);

        let findings = checker.check_text("zat").unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].suggestions.len(), 2);
    }

    #[test]
    fn test_possessive_is_not_flagged() {
        let findings = checker().check_text("the cat's mat.").unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn test_sentence_state_carries_across_lines() {
        // "Paris" opens a sentence on the second line, so the proper-noun
        // skip does not apply and the unknown word is flagged... unless it
        // is in the dictionary; "Parys" is not.
        let findings = checker().check_text("the cat sat.\nParys is far.").unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].word, "parys");

        // Mid-sentence continuation across lines keeps the skip active.
        let findings = checker().check_text("the cat sat in\nParys and slept.").unwrap();
        assert!(findings.is_empty());
    }
}
