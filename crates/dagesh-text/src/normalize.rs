//! Text normalization with offset bookkeeping.
//!
//! [`NormalizedText`] is built in a single forward pass over the display
//! string: drop-set characters are removed, final letters rewritten, and the
//! result case-folded, while every surviving character records where it came
//! from. Matching runs against the filtered string; the index maps filtered
//! byte ranges back into original coordinates.

use std::ops::Range;

use serde::Serialize;

use crate::chars;

/// One surviving character's position bookkeeping.
///
/// Both offset columns are strictly increasing across the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Byte offset of this character in the filtered string.
    pub filtered_offset: usize,
    /// Byte offset of the originating character in the original string.
    pub original_offset: usize,
    /// UTF-8 length of the originating character in the original string.
    pub original_char_len: usize,
}

/// A display string prepared for diacritic-insensitive matching.
///
/// The original text is never mutated; `filtered` holds the matching variant
/// and `index` holds one entry per filtered character. Construction is total:
/// any Unicode input is accepted, and empty input yields an empty filtered
/// string with an empty index.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    /// The filtered matching variant of the original string.
    filtered: String,
    /// One entry per filtered character, ordered by both offset columns.
    index: Vec<IndexEntry>,
    /// Byte length of the original string.
    original_len: usize,
}

impl NormalizedText {
    /// Normalizes a display string for matching.
    ///
    /// The drop-set removal fixes the index in this same pass; the
    /// final-letter rewrite and case fold are 1:1 character substitutions
    /// applied as each character is pushed, so they never move offsets.
    pub fn new(original: &str) -> Self {
        let mut filtered = String::with_capacity(original.len());
        let mut index = Vec::new();
        let mut offset = 0;

        for ch in original.chars() {
            let char_len = ch.len_utf8();
            if !chars::is_stripped_mark(ch) {
                index.push(IndexEntry {
                    filtered_offset: filtered.len(),
                    original_offset: offset,
                    original_char_len: char_len,
                });
                filtered.push(chars::fold_case(chars::rewrite_final(ch)));
            }
            offset += char_len;
        }

        Self {
            filtered,
            index,
            original_len: original.len(),
        }
    }

    /// The filtered matching variant.
    pub fn filtered(&self) -> &str {
        &self.filtered
    }

    /// The per-character offset index.
    pub fn index(&self) -> &[IndexEntry] {
        &self.index
    }

    /// Byte length of the original string this was built from.
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// True when nothing survived filtering.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Maps a filtered byte range back to original coordinates.
    ///
    /// The original range starts at the first matched character's original
    /// position and ends just past the last matched character. Marks that sat
    /// between matched characters are covered; marks trailing the last
    /// matched character are not. Degenerate or out-of-bounds input returns
    /// `None` instead of a span.
    pub fn map_to_original(&self, filtered_range: Range<usize>) -> Option<Range<usize>> {
        if filtered_range.end <= filtered_range.start
            || filtered_range.end > self.filtered.len()
        {
            return None;
        }

        // Entry whose character starts at (or floors) the range start.
        let first = self
            .index
            .partition_point(|e| e.filtered_offset <= filtered_range.start)
            .checked_sub(1)?;
        // Last entry whose character begins before the range end.
        let last = self
            .index
            .partition_point(|e| e.filtered_offset < filtered_range.end)
            .checked_sub(1)?;

        let start = self.index[first].original_offset;
        let end = self.index[last].original_offset + self.index[last].original_char_len;
        (end > start).then_some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let norm = NormalizedText::new("");
        assert!(norm.is_empty());
        assert_eq!(norm.filtered(), "");
        assert!(norm.index().is_empty());
    }

    #[test]
    fn plain_text_maps_one_to_one() {
        let norm = NormalizedText::new("abc");
        assert_eq!(norm.filtered(), "abc");
        let offsets: Vec<_> = norm.index().iter().map(|e| e.original_offset).collect();
        assert_eq!(offsets, vec![0, 1, 2]);
    }

    #[test]
    fn index_length_matches_filtered_chars() {
        let samples = ["", "שָׁלוֹם", "מֶלֶךְ הַמָּשִׁיחַ", "Hello שלום", "בְּרֵאשִׁ֖ית בָּרָ֣א"];
        for text in samples {
            let norm = NormalizedText::new(text);
            assert_eq!(norm.index().len(), norm.filtered().chars().count());
        }
    }

    #[test]
    fn index_offsets_strictly_increase() {
        let norm = NormalizedText::new("בְּרֵאשִׁ֖ית בָּרָ֣א אֱלֹהִ֑ים");
        for pair in norm.index().windows(2) {
            assert!(pair[0].filtered_offset < pair[1].filtered_offset);
            assert!(pair[0].original_offset < pair[1].original_offset);
        }
    }

    #[test]
    fn every_entry_points_at_its_source_character() {
        let text = "שָׁלוֹם Aלֵב";
        let norm = NormalizedText::new(text);
        for (filtered_char, entry) in norm.filtered().chars().zip(norm.index()) {
            let original_char = text[entry.original_offset..].chars().next().unwrap();
            assert_eq!(entry.original_char_len, original_char.len_utf8());
            let transformed = chars::fold_case(chars::rewrite_final(original_char));
            assert_eq!(filtered_char, transformed);
        }
    }

    #[test]
    fn marks_are_dropped() {
        let norm = NormalizedText::new("שָׁלוֹם");
        assert_eq!(norm.filtered(), "שלומ");
    }

    #[test]
    fn final_letters_rewritten_in_filtered() {
        let norm = NormalizedText::new("מלך");
        assert_eq!(norm.filtered(), "מלכ");
    }

    #[test]
    fn latin_is_lowercased() {
        let norm = NormalizedText::new("Hello World");
        assert_eq!(norm.filtered(), "hello world");
    }

    #[test]
    fn geresh_and_gershayim_are_dropped() {
        let norm = NormalizedText::new("צה״ל וד׳");
        assert_eq!(norm.filtered(), "צהל וד");
    }

    #[test]
    fn maqaf_survives_in_text() {
        let norm = NormalizedText::new("בית־ספר");
        assert_eq!(norm.filtered(), "בית־ספר");
    }

    #[test]
    fn map_full_range_spans_whole_original() {
        let text = "שָׁלוֹם";
        let norm = NormalizedText::new(text);
        let mapped = norm.map_to_original(0..norm.filtered().len()).unwrap();
        assert_eq!(mapped, 0..text.len());
    }

    #[test]
    fn map_covers_interior_marks() {
        // "של" in the filtered string covers shin plus its qamats and shin
        // dot in the original, up to and including lamed.
        let norm = NormalizedText::new("שָׁלוֹם");
        let mapped = norm.map_to_original(0..4).unwrap();
        assert_eq!(mapped, 0..8);
    }

    #[test]
    fn map_excludes_marks_trailing_the_last_letter() {
        // "שלו" ends at vav; the holam that follows vav stays outside.
        let norm = NormalizedText::new("שָׁלוֹם");
        let mapped = norm.map_to_original(0..6).unwrap();
        assert_eq!(mapped, 0..10);
    }

    #[test]
    fn map_rejects_degenerate_ranges() {
        let norm = NormalizedText::new("שלום");
        assert!(norm.map_to_original(3..3).is_none());
        assert!(norm.map_to_original(4..2).is_none());
    }

    #[test]
    fn map_rejects_out_of_bounds() {
        let norm = NormalizedText::new("אב");
        assert!(norm.map_to_original(0..100).is_none());
        let empty = NormalizedText::new("");
        assert!(empty.map_to_original(0..1).is_none());
    }
}
