//! Diacritic-insensitive match finding for dagesh.
//!
//! Runs normalized substring search over display text and maps every hit
//! back into original byte coordinates:
//!
//! - **[`find_matches`]**: all non-overlapping occurrences of one query,
//!   in text order.
//! - **[`find_matches_multi`]**: several terms searched independently,
//!   combined and merged into a flat overlap-free range set.
//! - **[`cursor`]**: wrap-around find-next/find-previous index helpers.
//!
//! # Example
//!
//! ```
//! use dagesh_match::{MatchRange, find_matches};
//!
//! let matches = find_matches("מֶלֶךְ מַלְכֵי הַמְּלָכִים", "מלך");
//! assert!(!matches.is_empty());
//! assert_eq!(matches[0].start, 0);
//! ```

#![warn(missing_docs)]

pub mod cursor;
mod find;
mod range;

pub use find::{MIN_QUERY_CHARS, find_matches, find_matches_multi};
pub use range::{MatchRange, merge_ranges};
