//! Highlight composition.
//!
//! Combines live search matches, the focused current match, and persisted
//! user annotations into per-layer span lists for the renderer. Every entry
//! point is a pure function of its inputs: no I/O, no retained state, and
//! "nothing matched" is an empty list, never an error.

use dagesh_match::{MatchRange, find_matches, find_matches_multi};
use dagesh_text::{StripProjection, strip_marks};
use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    span::{HighlightLayer, StyledSpan, UserHighlight},
};

/// Highlights every occurrence of a single query.
///
/// Each found range becomes a [`HighlightLayer::SearchMatch`] span. A blank
/// or too-short query yields no spans.
pub fn highlight_search(text: &str, query: &str, color: Color) -> Vec<StyledSpan> {
    find_matches(text, query)
        .into_iter()
        .map(|range| StyledSpan::new(range, HighlightLayer::SearchMatch { color }))
        .collect()
}

/// Highlights every occurrence of a query, emphasizing one of them.
///
/// The range whose start equals `current_start` is emitted as
/// [`HighlightLayer::CurrentMatch`]; every other range uses the base color.
/// At most one span receives the emphasis; a `current_start` that matches
/// no range leaves all spans as plain search matches.
pub fn highlight_search_with_current(
    text: &str,
    query: &str,
    current_start: Option<usize>,
    base_color: Color,
    current_color: Color,
) -> Vec<StyledSpan> {
    tag_current(find_matches(text, query), current_start, base_color, current_color)
}

/// Highlights several terms at once, merging overlapping hits.
///
/// Terms are searched independently and the combined ranges merged, so the
/// search layer never overlaps itself no matter how many terms hit the same
/// substring. The emphasis is applied to the merged range whose start
/// exactly equals `current_start`; when merging swallowed that offset into
/// the middle of a wider range, no range is emphasized. That exact-equality
/// tie-break is deliberate — no nearest-range fallback.
pub fn highlight_multi_term<S: AsRef<str>>(
    text: &str,
    terms: &[S],
    current_start: Option<usize>,
    base_color: Color,
    current_color: Color,
) -> Vec<StyledSpan> {
    tag_current(
        find_matches_multi(text, terms),
        current_start,
        base_color,
        current_color,
    )
}

/// Wraps ranges as search spans, emphasizing the one starting at `current_start`.
fn tag_current(
    ranges: Vec<MatchRange>,
    current_start: Option<usize>,
    base_color: Color,
    current_color: Color,
) -> Vec<StyledSpan> {
    ranges
        .into_iter()
        .map(|range| {
            let layer = if current_start == Some(range.start) {
                HighlightLayer::CurrentMatch {
                    color: current_color,
                }
            } else {
                HighlightLayer::SearchMatch { color: base_color }
            };
            StyledSpan::new(range, layer)
        })
        .collect()
}

/// Styles persisted user highlights against the currently displayed text.
///
/// Stored ranges are original-text (diacritics-present) byte offsets. When
/// the display hides diacritics, both endpoints are re-projected into
/// stripped coordinates; otherwise they are used as stored. Either way the
/// endpoints are clamped into the displayed text's bounds — a stale range
/// from an edited document degrades to a shorter span or disappears, it
/// never faults. Each emitted span carries the stored color with its alpha
/// overridden by `alpha`.
pub fn apply_user_highlights(
    highlights: &[UserHighlight],
    original_text: &str,
    diacritics_shown: bool,
    alpha: u8,
) -> Vec<StyledSpan> {
    let projection = (!diacritics_shown).then(|| StripProjection::new(original_text));

    let mut spans = Vec::with_capacity(highlights.len());
    for stored in highlights {
        let (start, end) = match &projection {
            Some(map) => (map.project(stored.range.start), map.project(stored.range.end)),
            None => (
                clamp_to_boundary(original_text, stored.range.start),
                clamp_to_boundary(original_text, stored.range.end),
            ),
        };
        if end <= start {
            continue;
        }
        spans.push(StyledSpan::new(
            MatchRange::new(start, end),
            HighlightLayer::UserHighlight {
                color: stored.color.with_alpha(alpha),
            },
        ));
    }
    spans
}

/// Clamps a byte offset into the text, snapping down to a char boundary.
fn clamp_to_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Colors and intensity used when composing a line.
///
/// The engine never inspects these values; they come from the host's theme
/// and pass straight through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSettings {
    /// Base color for search-match spans.
    pub search_color: Color,
    /// Emphasis color for the current match.
    pub current_color: Color,
    /// Alpha applied to every user-highlight color.
    pub user_alpha: u8,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            search_color: Color::rgb(0xff, 0xe0, 0x8a),
            current_color: Color::rgb(0xff, 0xb7, 0x03),
            user_alpha: 96,
        }
    }
}

/// One line's composed highlight layers.
///
/// The three lists are positioned against the displayed variant of the line
/// and are handed to the renderer back to front: user annotations first,
/// search matches above them, current-match emphasis on top. The compositor
/// never flattens across layers; stacking is the renderer's contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineHighlights {
    /// Background-most layer: persisted user annotations.
    pub user: Vec<StyledSpan>,
    /// Middle layer: every occurrence of the active terms.
    pub search: Vec<StyledSpan>,
    /// Foreground-most layer: the focused occurrence, if any.
    pub current: Vec<StyledSpan>,
}

impl LineHighlights {
    /// Composes all three layers for one line.
    ///
    /// `original` is the stored line with diacritics intact. When
    /// `diacritics_shown` is false the host is displaying
    /// [`strip_marks`]`(original)`, and every span in the result is
    /// positioned against that stripped variant; otherwise spans target the
    /// original as-is.
    pub fn compose<S: AsRef<str>>(
        original: &str,
        terms: &[S],
        current_start: Option<usize>,
        stored: &[UserHighlight],
        diacritics_shown: bool,
        settings: &HighlightSettings,
    ) -> Self {
        let stripped;
        let displayed = if diacritics_shown {
            original
        } else {
            stripped = strip_marks(original);
            &stripped
        };

        let mut search = Vec::new();
        let mut current = Vec::new();
        for range in find_matches_multi(displayed, terms) {
            if current_start == Some(range.start) {
                current.push(StyledSpan::new(
                    range,
                    HighlightLayer::CurrentMatch {
                        color: settings.current_color,
                    },
                ));
            } else {
                search.push(StyledSpan::new(
                    range,
                    HighlightLayer::SearchMatch {
                        color: settings.search_color,
                    },
                ));
            }
        }

        Self {
            user: apply_user_highlights(stored, original, diacritics_shown, settings.user_alpha),
            search,
            current,
        }
    }

    /// The layers in fixed back-to-front render order.
    pub fn layers(&self) -> [&[StyledSpan]; 3] {
        [&self.user, &self.search, &self.current]
    }

    /// True when no layer has any span.
    pub fn is_empty(&self) -> bool {
        self.user.is_empty() && self.search.is_empty() && self.current.is_empty()
    }
}
