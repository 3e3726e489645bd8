//! Report records and context extraction for spell check results.

use serde::{Deserialize, Serialize};

/// A flagged word with its location, context, and suggested corrections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Misspelling {
    /// The flagged word, lowercased.
    pub word: String,
    /// Line number, 1-based.
    pub line: usize,
    /// Column of the first character, 0-based (chars).
    pub column: usize,
    /// A short snippet of the line around the word.
    pub context: String,
    /// Corrections ordered closest first.
    pub suggestions: Vec<String>,
}

/// Extract a context snippet around the span `[start, end)` of `line`.
///
/// Up to three words on each side are included and the flagged span is
/// wrapped in single quotes. Offsets are char indices; out-of-range spans
/// are clamped to the line.
pub fn extract_context(line: &str, start: usize, end: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();
    let start = start.min(len);
    let end = end.clamp(start, len);

    // Walk left over at most three words.
    let mut i = start.saturating_sub(1);
    let mut word_count = 0;
    while i > 0 && word_count < 3 {
        if chars[i].is_alphabetic() {
            while i > 0 && chars[i].is_alphabetic() {
                i -= 1;
            }
            word_count += 1;
        } else {
            i -= 1;
        }
    }
    if i != 0 {
        i += 1;
    }

    // Walk right over at most three words.
    let mut j = (end + 1).min(len);
    let mut word_count = 0;
    while j < len && word_count < 3 {
        if chars[j].is_alphabetic() {
            while j < len && chars[j].is_alphabetic() {
                j += 1;
            }
            word_count += 1;
        } else {
            j += 1;
        }
    }

    let before: String = chars[i..start].iter().collect();
    let flagged: String = chars[start..end].iter().collect();
    let after: String = chars[end..j].iter().collect();
    format!("{before}'{flagged}'{after}")
}
