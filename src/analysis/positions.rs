//! Text position finder
//!
//! Locates phrase occurrences and ATS-hostile characters in raw text so
//! higher-level analyzers can attach line-numbered evidence to their
//! findings. Phrase scanning is case-insensitive and advances one character
//! after each match, so overlapping occurrences are reported by design.

use crate::analysis::rules::{UNPARSABLE_GLYPHS, WEAK_VERBS};
use serde::{Deserialize, Serialize};

/// A located occurrence of a phrase. Offsets are byte indices into the
/// original text; `line_number` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPosition {
    pub phrase: String,
    pub start_index: usize,
    pub end_index: usize,
    pub line_number: usize,
    pub confidence: f64,
}

/// 1-based line and 0-based column within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

const PHRASE_CONFIDENCE: f64 = 0.95;
const GLYPH_CONFIDENCE: f64 = 1.0;

/// Find all case-insensitive occurrences of `phrase` in `text`, including
/// overlapping ones: searching "aa" in "aaa" yields matches at 0 and 1.
pub fn find_positions(text: &str, phrase: &str) -> Vec<TextPosition> {
    if phrase.is_empty() {
        return Vec::new();
    }

    // One lowercase char per input char keeps offsets aligned with the
    // original text even when full Unicode lowercasing would expand.
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let lower: Vec<char> = chars.iter().map(|(_, c)| fold_char(*c)).collect();
    let needle: Vec<char> = phrase.chars().map(fold_char).collect();

    let mut positions = Vec::new();
    if needle.len() > lower.len() {
        return positions;
    }

    for i in 0..=(lower.len() - needle.len()) {
        if lower[i..i + needle.len()] == needle[..] {
            let start_index = chars[i].0;
            let end_index = match chars.get(i + needle.len()) {
                Some((offset, _)) => *offset,
                None => text.len(),
            };
            positions.push(TextPosition {
                phrase: phrase.to_string(),
                start_index,
                end_index,
                line_number: line_number_at(text, start_index),
                confidence: PHRASE_CONFIDENCE,
            });
        }
    }

    positions
}

/// Union of `find_positions` over all phrases, sorted ascending by start
/// offset. The sort is stable, so ties keep the phrase-list order.
pub fn find_all_positions(text: &str, phrases: &[&str]) -> Vec<TextPosition> {
    let mut all = Vec::new();
    for phrase in phrases {
        all.extend(find_positions(text, phrase));
    }
    all.sort_by_key(|p| p.start_index);
    all
}

/// Flag characters an ATS parser is likely to choke on, at full confidence.
pub fn find_unparsable_characters(text: &str) -> Vec<TextPosition> {
    let mut positions = Vec::new();
    for (offset, ch) in text.char_indices() {
        if UNPARSABLE_GLYPHS.contains(&ch) {
            positions.push(TextPosition {
                phrase: ch.to_string(),
                start_index: offset,
                end_index: offset + ch.len_utf8(),
                line_number: line_number_at(text, offset),
                confidence: GLYPH_CONFIDENCE,
            });
        }
    }
    positions
}

/// Locate weak phrasings like "responsible for" that should be rewritten
/// with strong action verbs.
pub fn find_weak_action_verbs(text: &str) -> Vec<TextPosition> {
    find_all_positions(text, &WEAK_VERBS)
}

/// Lines of the text with blank lines removed.
pub fn extract_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Convert a byte offset into a 1-based line and column. Exact inverse of
/// [`line_col_to_char`] for valid offsets.
pub fn char_to_line_col(text: &str, offset: usize) -> LineCol {
    let mut current = 0usize;
    let lines: Vec<&str> = text.split('\n').collect();
    for (i, line) in lines.iter().enumerate() {
        let line_span = line.len() + 1; // trailing newline
        if current + line_span > offset {
            return LineCol {
                line: i + 1,
                col: offset - current,
            };
        }
        current += line_span;
    }
    LineCol {
        line: lines.len(),
        col: lines.last().map(|l| l.len()).unwrap_or(0),
    }
}

/// Convert a 1-based line and column back into a byte offset.
pub fn line_col_to_char(text: &str, pos: LineCol) -> usize {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut offset = 0usize;
    for line in lines.iter().take(pos.line.saturating_sub(1)) {
        offset += line.len() + 1;
    }
    offset + pos.col
}

fn line_number_at(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_matches() {
        let positions = find_positions("aaa", "aa");
        let starts: Vec<usize> = positions.iter().map(|p| p.start_index).collect();
        assert_eq!(starts, vec![0, 1]);
    }

    #[test]
    fn test_case_insensitive_match_with_line_numbers() {
        let text = "Led the team\nResponsible For delivery";
        let positions = find_positions(text, "responsible for");
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].line_number, 2);
        assert_eq!(positions[0].start_index, 13);
        assert_eq!(positions[0].end_index, 13 + "Responsible For".len());
        assert_eq!(positions[0].confidence, 0.95);
    }

    #[test]
    fn test_find_all_positions_sorted_stable() {
        let text = "ab ab";
        let positions = find_all_positions(text, &["ab", "b"]);
        // "ab" at 0 and 3, "b" at 1 and 4; sorted by start, phrase order on ties
        let observed: Vec<(usize, &str)> = positions
            .iter()
            .map(|p| (p.start_index, p.phrase.as_str()))
            .collect();
        assert_eq!(observed, vec![(0, "ab"), (1, "b"), (3, "ab"), (4, "b")]);
    }

    #[test]
    fn test_unparsable_characters() {
        let text = "Skills™\n• Rust";
        let positions = find_unparsable_characters(text);
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].phrase, "™");
        assert_eq!(positions[0].confidence, 1.0);
        assert_eq!(positions[1].phrase, "•");
        assert_eq!(positions[1].line_number, 2);
    }

    #[test]
    fn test_weak_verbs() {
        let text = "Responsible for reports. Helped with onboarding. Worked on tooling.";
        let positions = find_weak_action_verbs(text);
        assert_eq!(positions.len(), 3);
        assert!(positions.windows(2).all(|w| w[0].start_index <= w[1].start_index));
    }

    #[test]
    fn test_line_col_round_trip() {
        let text = "first line\nsecond line\nthird";
        for offset in 0..text.len() {
            let lc = char_to_line_col(text, offset);
            assert_eq!(line_col_to_char(text, lc), offset, "offset {}", offset);
        }
    }

    #[test]
    fn test_extract_lines_drops_blank_lines() {
        let lines = extract_lines("first\n\n   \nsecond\n");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_phrase_yields_nothing() {
        assert!(find_positions("anything", "").is_empty());
    }
}
