//! Hebrew character classification and single-character rewrites.
//!
//! All matching-insensitivity rules of the engine reduce to three per-character
//! decisions: is this a mark that matching ignores, is this a final-form letter,
//! and does this character have a usable single-character lowercase form.

/// Hebrew maqaf (U+05BE), the hyphen-like word connector.
///
/// Not part of the drop set: display text keeps it, while query normalization
/// rewrites it to a space so it behaves as a word separator.
pub const MAQAF: char = '\u{05BE}';

/// Returns true for characters that matching ignores and stripped display hides.
///
/// The set covers cantillation marks (teamim), vowel points including dagesh,
/// mapiq and meteg, rafe, the shin/sin dots, qamats qatan, and the
/// geresh/gershayim punctuation marks.
pub fn is_stripped_mark(c: char) -> bool {
    matches!(c,
        '\u{0591}'..='\u{05AF}'   // cantillation
        | '\u{05B0}'..='\u{05BD}' // vowel points, dagesh/mapiq, meteg
        | '\u{05BF}'              // rafe
        | '\u{05C1}'              // shin dot
        | '\u{05C2}'              // sin dot
        | '\u{05C7}'              // qamats qatan
        | '\u{05F3}'              // geresh
        | '\u{05F4}'              // gershayim
    )
}

/// Rewrites a Hebrew final-form letter to its base form.
///
/// The five sofit letters map to their word-medial equivalents; every other
/// character passes through unchanged. The rewrite is 1:1 in both scalar
/// values and UTF-8 bytes, so it never disturbs offset bookkeeping.
pub fn rewrite_final(c: char) -> char {
    match c {
        '\u{05DA}' => '\u{05DB}', // kaf sofit -> kaf
        '\u{05DD}' => '\u{05DE}', // mem sofit -> mem
        '\u{05DF}' => '\u{05E0}', // nun sofit -> nun
        '\u{05E3}' => '\u{05E4}', // pe sofit -> pe
        '\u{05E5}' => '\u{05E6}', // tsadi sofit -> tsadi
        _ => c,
    }
}

/// Case-folds a character when its lowercase form is a single scalar value.
///
/// Hebrew has no case, so this only affects mixed-in Latin text. Characters
/// whose lowercase expansion is more than one scalar value (e.g. U+0130) are
/// kept unchanged to preserve the one-entry-per-character index invariant.
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cantillation_and_points_are_marks() {
        assert!(is_stripped_mark('\u{0591}')); // etnahta
        assert!(is_stripped_mark('\u{05AF}'));
        assert!(is_stripped_mark('\u{05B8}')); // qamats
        assert!(is_stripped_mark('\u{05BC}')); // dagesh
        assert!(is_stripped_mark('\u{05BD}')); // meteg
        assert!(is_stripped_mark('\u{05BF}')); // rafe
        assert!(is_stripped_mark('\u{05C1}')); // shin dot
        assert!(is_stripped_mark('\u{05C2}')); // sin dot
        assert!(is_stripped_mark('\u{05C7}')); // qamats qatan
        assert!(is_stripped_mark('\u{05F3}')); // geresh
        assert!(is_stripped_mark('\u{05F4}')); // gershayim
    }

    #[test]
    fn letters_and_maqaf_are_not_marks() {
        assert!(!is_stripped_mark('א'));
        assert!(!is_stripped_mark('ת'));
        assert!(!is_stripped_mark(MAQAF));
        assert!(!is_stripped_mark('a'));
        assert!(!is_stripped_mark(' '));
    }

    #[test]
    fn final_letters_rewrite_to_base() {
        assert_eq!(rewrite_final('ך'), 'כ');
        assert_eq!(rewrite_final('ם'), 'מ');
        assert_eq!(rewrite_final('ן'), 'נ');
        assert_eq!(rewrite_final('ף'), 'פ');
        assert_eq!(rewrite_final('ץ'), 'צ');
    }

    #[test]
    fn non_final_letters_pass_through() {
        assert_eq!(rewrite_final('כ'), 'כ');
        assert_eq!(rewrite_final('ש'), 'ש');
        assert_eq!(rewrite_final('x'), 'x');
    }

    #[test]
    fn fold_case_lowers_latin() {
        assert_eq!(fold_case('H'), 'h');
        assert_eq!(fold_case('z'), 'z');
        assert_eq!(fold_case('É'), 'é');
    }

    #[test]
    fn fold_case_is_noop_for_hebrew() {
        assert_eq!(fold_case('ש'), 'ש');
        assert_eq!(fold_case('ם'), 'ם');
    }

    #[test]
    fn fold_case_keeps_multi_char_expansions() {
        // U+0130 lowercases to "i" + combining dot; folding it would break
        // the 1:1 index invariant, so it stays as-is.
        assert_eq!(fold_case('\u{0130}'), '\u{0130}');
    }
}
