//! Highlight composition and span styling for dagesh.
//!
//! Turns match ranges and stored annotations into renderer-ready style
//! spans across three independent layers: persisted user highlights at the
//! back, search matches above them, and the current-match emphasis on top.
//! Spans within one layer never overlap; the renderer stacks the layers.
//!
//! # Example
//!
//! ```
//! use dagesh_highlight::{Color, HighlightSettings, LineHighlights};
//!
//! let highlights = LineHighlights::compose(
//!     "שָׁלוֹם שָׁלוֹם",
//!     &["שלום"],
//!     None,
//!     &[],
//!     true,
//!     &HighlightSettings::default(),
//! );
//! assert_eq!(highlights.search.len(), 2);
//! ```

#![warn(missing_docs)]

mod color;
mod compose;
mod span;

pub use color::{Color, ParseColorError};
pub use compose::{
    HighlightSettings, LineHighlights, apply_user_highlights, highlight_multi_term,
    highlight_search, highlight_search_with_current,
};
pub use span::{HighlightLayer, StyledSpan, UserHighlight};
