//! Hebrew-aware text and query normalization for dagesh.
//!
//! This crate prepares display strings and search terms for
//! diacritic-insensitive, final-letter-insensitive, case-insensitive
//! matching:
//!
//! - **[`NormalizedText`]**: strips marks from a display string while
//!   recording, per surviving character, its original byte offset, so match
//!   positions found in the filtered string map back onto the untouched
//!   original.
//! - **[`normalize_query`]**: applies the same rules to a user-entered
//!   search term.
//! - **[`strip_marks`] / [`StripProjection`]**: the mark-free display
//!   variant and the offset map needed to carry stored highlight ranges
//!   onto it.
//!
//! # Example
//!
//! ```
//! use dagesh_text::NormalizedText;
//!
//! let norm = NormalizedText::new("שָׁלוֹם");
//! assert_eq!(norm.filtered(), "שלומ");
//! assert_eq!(norm.map_to_original(0..norm.filtered().len()), Some(0..14));
//! ```

#![warn(missing_docs)]

pub mod chars;
mod normalize;
mod query;
mod strip;

pub use normalize::{IndexEntry, NormalizedText};
pub use query::normalize_query;
pub use strip::{StripProjection, strip_marks};
