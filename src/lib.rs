//! This crate provides [`Span`], a closed interval over `i64`, and
//! [`Multispan`], an ordered collection of spans that can be merged,
//! normalized and parsed from compact range-lists.
//!
//! ## Example
//!
//! ```rust
//! use multispan::{parse, Span};
//!
//! let ms = parse("7-9,1,3-5,4-6").unwrap();
//!
//! // parsing keeps the spans sorted by start but does not merge them
//! assert_eq!(ms.len(), 4);
//!
//! let ms = ms.insert([Span::new(2, 3)]).normalize();
//!
//! assert_eq!(ms.to_string(), "1,2-6,7-9");
//! assert!(ms.contains_point(6));
//! assert!(!ms.contains_point(0));
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Closed Spans
//!
//! Both ends of a [`Span`] are included, so `[4, 4]` is a valid span
//! holding the single point `4`. [`Span::new()`] swaps its arguments if
//! they are the wrong way round; writing a span literally skips that check.
//!
//! ### Overlap
//!
//! Two spans are "overlapping" if there exists a point that is contained
//! within both spans. This includes spans that touch at a boundary, like
//! `[5, 6]` and `[6, 9]`, but not spans that are merely adjacent over the
//! integers, like `[5, 6]` and `[7, 9]`.
//!
//! ### Gap
//!
//! The gap between two non-overlapping spans runs from the end of the
//! earlier span to the start of the later one, *including* those two
//! boundary points. The gap between `[0, 6]` and `[10, 14]` is therefore
//! `[6, 10]`, which overlaps both of them.
//!
//! ### Normalization
//!
//! [`Multispan::insert()`] only keeps spans sorted by start,
//! [`Multispan::normalize()`] combines every run of overlapping spans into
//! one, leaving a sorted list of disjoint spans.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for [`Span`] and
//!   [`Multispan`] (a `Multispan` is a plain sequence of spans).

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

pub mod error;
pub mod multispan;
pub mod span;

pub use crate::error::{ParseError, SpanError};
pub use crate::multispan::{parse, Multispan};
pub use crate::span::Span;
