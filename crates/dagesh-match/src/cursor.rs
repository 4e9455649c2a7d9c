//! Wrap-around navigation over a match list.
//!
//! Hosts drive find-next/find-previous with these helpers and feed the
//! selected match's start offset back into highlighting as the current
//! match.

/// Returns the index of the next match, wrapping past the end.
///
/// With no current selection the first match is chosen. An empty match
/// list yields `None`.
pub fn next_index(len: usize, current: Option<usize>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(idx) => Some((idx + 1) % len),
        None => Some(0),
    }
}

/// Returns the index of the previous match, wrapping past the start.
///
/// With no current selection the last match is chosen. An empty match
/// list yields `None`.
pub fn prev_index(len: usize, current: Option<usize>) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(0) | None => Some(len - 1),
        Some(idx) => Some(idx - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances() {
        assert_eq!(next_index(3, Some(0)), Some(1));
        assert_eq!(next_index(3, Some(1)), Some(2));
    }

    #[test]
    fn next_wraps() {
        assert_eq!(next_index(3, Some(2)), Some(0));
    }

    #[test]
    fn next_from_none_picks_first() {
        assert_eq!(next_index(3, None), Some(0));
    }

    #[test]
    fn prev_goes_back() {
        assert_eq!(prev_index(3, Some(2)), Some(1));
    }

    #[test]
    fn prev_wraps() {
        assert_eq!(prev_index(3, Some(0)), Some(2));
    }

    #[test]
    fn prev_from_none_picks_last() {
        assert_eq!(prev_index(3, None), Some(2));
    }

    #[test]
    fn empty_list_has_no_selection() {
        assert_eq!(next_index(0, None), None);
        assert_eq!(prev_index(0, Some(1)), None);
    }
}
