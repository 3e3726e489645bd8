//! Line scanning and word extraction for spell checking.
//!
//! The scanner walks a line character by character and emits maximal
//! alphabetic runs as candidate words, tracking the position metadata the
//! checker's heuristics need (column, capitalization, sentence starts).

use serde::Serialize;

/// A candidate word found in a line of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordOccurrence {
    /// Lowercased word used for dictionary lookups.
    pub text: String,
    /// The word as it appeared in the text.
    pub original: String,
    /// Line number, 1-based.
    pub line: usize,
    /// Column of the first character within the line, 0-based (chars).
    pub column: usize,
    /// Whether this word opens a sentence.
    pub sentence_start: bool,
    /// Whether the word's first character is uppercase.
    pub capitalized: bool,
}

impl WordOccurrence {
    fn new(original: &str, line: usize, column: usize, sentence_start: bool) -> Self {
        let capitalized = original.chars().next().is_some_and(|c| c.is_uppercase());
        WordOccurrence {
            text: original.to_lowercase(),
            original: original.to_string(),
            line,
            column,
            sentence_start,
            capitalized,
        }
    }

    /// Column just past the last character of the word, 0-based (chars).
    pub fn end_column(&self) -> usize {
        self.column + self.original.chars().count()
    }
}

/// Extract candidate words from one line.
///
/// `sentence_start` carries the sentence state from the previous line; the
/// returned flag carries it into the next one. A `.`, `!`, or `?` marks
/// the following word as a sentence opener. A `'s` suffix right after a
/// word is consumed so possessives do not yield a phantom `s` word.
pub fn scan_line(
    line: &str,
    line_number: usize,
    mut sentence_start: bool,
) -> (Vec<WordOccurrence>, bool) {
    let chars: Vec<char> = line.chars().collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }

            let original: String = chars[start..i].iter().collect();
            words.push(WordOccurrence::new(
                &original,
                line_number,
                start,
                sentence_start,
            ));
            sentence_start = false;

            if i + 1 < chars.len() && chars[i] == '\'' && chars[i + 1] == 's' {
                i += 2;
            }
        } else {
            i += 1;
            if c == '.' || c == '!' || c == '?' {
                sentence_start = true;
            }
        }
    }

    (words, sentence_start)
}
