//! Match finding against normalized text.

use dagesh_text::{NormalizedText, normalize_query};

use crate::range::{MatchRange, merge_ranges};

/// Minimum normalized query length, in scalar values, for a search to run.
///
/// Single-character queries over short Hebrew letters match almost
/// everywhere and flood a page with highlights, so anything shorter than
/// this is treated as "search inactive".
pub const MIN_QUERY_CHARS: usize = 2;

/// Finds every diacritic-insensitive occurrence of `query` in `text`.
///
/// Both sides are normalized, the filtered text is scanned left to right
/// for non-overlapping occurrences (the cursor advances past each hit, so
/// `"aa"` in `"aaaa"` yields two matches, not three), and each hit is
/// mapped back into original byte coordinates. Returns ranges in text
/// order. Empty input, a blank query, or a too-short query yield an empty
/// result, never an error.
pub fn find_matches(text: &str, query: &str) -> Vec<MatchRange> {
    let needle = normalize_query(query);
    if needle.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let norm = NormalizedText::new(text);
    let haystack = norm.filtered();

    let mut matches = Vec::new();
    let mut cursor = 0;

    while cursor + needle.len() <= haystack.len() {
        let Some(found) = haystack[cursor..].find(&needle) else {
            break;
        };
        let start = cursor + found;
        let end = start + needle.len();
        if let Some(mapped) = norm.map_to_original(start..end) {
            matches.push(MatchRange::from(mapped));
        }
        cursor = end;
    }

    matches
}

/// Finds matches for several terms and merges the combined ranges.
///
/// Each term is searched independently (terms below [`MIN_QUERY_CHARS`] are
/// skipped); the concatenated results are sorted and overlaps merged, so
/// the returned set has no internal overlaps regardless of how many terms
/// hit the same substring.
pub fn find_matches_multi<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<MatchRange> {
    let mut all = Vec::new();
    for term in terms {
        all.extend(find_matches(text, term.as_ref()));
    }
    merge_ranges(all)
}
