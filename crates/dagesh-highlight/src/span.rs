//! Span and layer types handed to the renderer.

use dagesh_match::MatchRange;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Which highlight layer a span belongs to, with its resolved color.
///
/// Spans from different layers may overlap in the composed output — the
/// renderer stacks them back to front — but spans within one layer never
/// overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layer", rename_all = "snake_case")]
pub enum HighlightLayer {
    /// Base highlight for every occurrence of the active query.
    SearchMatch {
        /// Background color for the occurrence.
        color: Color,
    },
    /// Emphasis for the single occurrence focused by find-next.
    CurrentMatch {
        /// Background color for the focused occurrence.
        color: Color,
    },
    /// A persisted user annotation, independent of any active search.
    UserHighlight {
        /// Stored color with the caller's alpha applied.
        color: Color,
    },
}

impl HighlightLayer {
    /// The resolved color for this span.
    pub fn color(&self) -> Color {
        match *self {
            Self::SearchMatch { color }
            | Self::CurrentMatch { color }
            | Self::UserHighlight { color } => color,
        }
    }
}

/// A styled half-open byte range, positioned against the displayed text.
///
/// Ephemeral: recomputed on every text, query, or highlight-set change and
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSpan {
    /// Byte offset of the span start.
    pub start: usize,
    /// Byte offset one past the span end.
    pub end: usize,
    /// Layer and color for the renderer.
    #[serde(flatten)]
    pub layer: HighlightLayer,
}

impl StyledSpan {
    /// Creates a span from a match range and a layer.
    pub fn new(range: MatchRange, layer: HighlightLayer) -> Self {
        Self {
            start: range.start,
            end: range.end,
            layer,
        }
    }
}

/// A persisted user-highlight record, as supplied by the host's store.
///
/// Offsets are byte positions into the diacritics-present original line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHighlight {
    /// Stored range in original-text coordinates.
    pub range: MatchRange,
    /// Stored annotation color; alpha is overridden at composition time.
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_color_resolves_each_variant() {
        let color = Color::rgb(10, 20, 30);
        assert_eq!(HighlightLayer::SearchMatch { color }.color(), color);
        assert_eq!(HighlightLayer::CurrentMatch { color }.color(), color);
        assert_eq!(HighlightLayer::UserHighlight { color }.color(), color);
    }

    #[test]
    fn span_serializes_with_flattened_layer() {
        let span = StyledSpan::new(
            MatchRange::new(3, 9),
            HighlightLayer::SearchMatch {
                color: Color::rgb(0xff, 0xe0, 0x8a),
            },
        );
        let json = serde_json::to_value(&span).unwrap();
        assert_eq!(json["start"], 3);
        assert_eq!(json["end"], 9);
        assert_eq!(json["layer"], "search_match");
        assert_eq!(json["color"], "#ffe08a");
    }
}
