//! A module containing [`Multispan`] and the range-list parser, [`parse()`].

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{ParseError, Span};

mod parse;

pub use parse::parse;

/// An ordered sequence of [`Span`]s, sorted ascending by start.
///
/// A `Multispan` is only guaranteed to be free of overlaps after
/// [`Multispan::normalize()`]; [`Multispan::insert()`] keeps the spans sorted
/// but leaves overlapping spans as they are.
///
/// Both operations leave `self` untouched and return a new `Multispan`, so
/// calls are chained by rebinding.
///
/// # Examples
/// ```
/// use multispan::{Multispan, Span};
///
/// let mut ms = Multispan::new();
/// ms = ms.insert([Span::new(3, 6), Span::new(1, 4), Span::new(8, 8)]);
///
/// assert_eq!(
/// 	ms.as_slice(),
/// 	[Span::new(1, 4), Span::new(3, 6), Span::new(8, 8)]
/// );
///
/// let ms = ms.normalize();
///
/// assert_eq!(ms.as_slice(), [Span::new(1, 6), Span::new(8, 8)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(transparent)
)]
pub struct Multispan {
	spans: Vec<Span>,
}

/// Incoming spans are buffered inline up to this many before spilling to
/// the heap.
const INLINE_INSERT: usize = 8;

impl Multispan {
	/// Makes a new, empty `Multispan`.
	pub fn new() -> Self {
		Multispan { spans: Vec::new() }
	}

	/// Makes a new, empty `Multispan` with room for at least
	/// `capacity_hint` spans. The hint has no effect other than
	/// pre-allocating.
	pub fn with_capacity(capacity_hint: usize) -> Self {
		Multispan {
			spans: Vec::with_capacity(capacity_hint),
		}
	}

	/// Returns a new `Multispan` holding both the existing spans and the
	/// given `spans`, sorted by start.
	///
	/// The given spans are sorted first and then merged with the existing
	/// ones in a single pass. When an existing and a new span have the same
	/// start, the existing span comes first.
	///
	/// Overlapping spans are kept as they are, use
	/// [`Multispan::normalize()`] to collapse them.
	///
	/// # Examples
	/// ```
	/// use multispan::{Multispan, Span};
	///
	/// let ms = Multispan::from([
	/// 	Span::new(1, 10),
	/// 	Span::new(20, 30),
	/// 	Span::new(40, 50),
	/// ]);
	///
	/// let ms = ms.insert([Span::new(45, 55), Span::new(5, 15), Span::new(30, 35)]);
	///
	/// assert_eq!(
	/// 	ms.as_slice(),
	/// 	[
	/// 		Span::new(1, 10),
	/// 		Span::new(5, 15),
	/// 		Span::new(20, 30),
	/// 		Span::new(30, 35),
	/// 		Span::new(40, 50),
	/// 		Span::new(45, 55),
	/// 	]
	/// );
	/// ```
	pub fn insert<T>(&self, spans: T) -> Multispan
	where
		T: IntoIterator<Item = Span>,
	{
		let mut incoming: SmallVec<[Span; INLINE_INSERT]> =
			spans.into_iter().collect();
		incoming.sort_by_key(|span| span.start);

		if self.spans.is_empty() {
			return Multispan {
				spans: incoming.into_vec(),
			};
		}

		let mut merged = Vec::with_capacity(self.spans.len() + incoming.len());
		merged.extend(
			self.spans
				.iter()
				.copied()
				.merge_by(incoming, |existing, new| existing.start <= new.start),
		);

		Multispan { spans: merged }
	}

	/// Returns a new `Multispan` where every run of overlapping spans has
	/// been combined into one span with [`Span::combine()`].
	///
	/// The result is sorted by start and no two of its spans overlap.
	/// Spans that are adjacent but share no point, such as `[1, 4]` and
	/// `[5, 6]`, are kept apart.
	///
	/// # Examples
	/// ```
	/// use multispan::{Multispan, Span};
	///
	/// let ms = Multispan::from([
	/// 	Span::new(1, 4),
	/// 	Span::new(2, 7),
	/// 	Span::new(8, 8),
	/// 	Span::new(9, 16),
	/// 	Span::new(11, 13),
	/// ]);
	///
	/// assert_eq!(
	/// 	ms.normalize().as_slice(),
	/// 	[Span::new(1, 7), Span::new(8, 8), Span::new(9, 16)]
	/// );
	/// ```
	pub fn normalize(&self) -> Multispan {
		if self.spans.len() <= 1 {
			return self.clone();
		}

		let mut sorted = self.spans.clone();
		sorted.sort_by_key(|span| span.start);

		let spans: Vec<Span> = sorted
			.into_iter()
			.coalesce(|left, right| left.combine(right).map_err(|_| (left, right)))
			.collect();

		log::trace!(
			"normalized {} spans into {}",
			self.spans.len(),
			spans.len()
		);

		Multispan { spans }
	}

	/// Returns the span at position `index`.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds, see [`Multispan::try_get()`] for
	/// a non-panicking version.
	pub fn get(&self, index: usize) -> Span {
		self.spans[index]
	}

	/// Returns the span at position `index`, or `None` if `index` is out of
	/// bounds.
	pub fn try_get(&self, index: usize) -> Option<Span> {
		self.spans.get(index).copied()
	}

	/// Returns `true` if any span contains `point`.
	pub fn contains_point(&self, point: i64) -> bool {
		self.spans.iter().any(|span| span.contains(point))
	}

	/// Returns the number of spans.
	pub fn len(&self) -> usize {
		self.spans.len()
	}

	/// Returns `true` if there are no spans.
	pub fn is_empty(&self) -> bool {
		self.spans.is_empty()
	}

	/// Returns the spans as a slice, in order.
	pub fn as_slice(&self) -> &[Span] {
		&self.spans
	}

	/// Returns an iterator over the spans, in order.
	pub fn iter(&self) -> core::slice::Iter<'_, Span> {
		self.spans.iter()
	}

	/// Returns the first span, if any.
	pub fn first(&self) -> Option<Span> {
		self.spans.first().copied()
	}

	/// Returns the last span, if any.
	pub fn last(&self) -> Option<Span> {
		self.spans.last().copied()
	}
}

// Trait Impls ==========================

/// Wraps the spans as they are, without sorting. This is how fixtures and
/// already-sorted data are brought in.
impl From<Vec<Span>> for Multispan {
	fn from(spans: Vec<Span>) -> Self {
		Multispan { spans }
	}
}
/// Wraps the spans as they are, without sorting.
impl<const N: usize> From<[Span; N]> for Multispan {
	fn from(spans: [Span; N]) -> Self {
		Multispan {
			spans: Vec::from(spans),
		}
	}
}
impl From<Multispan> for Vec<Span> {
	fn from(multispan: Multispan) -> Self {
		multispan.spans
	}
}

/// Collects through [`Multispan::insert()`], so the result is sorted.
impl FromIterator<Span> for Multispan {
	fn from_iter<T: IntoIterator<Item = Span>>(iter: T) -> Self {
		Multispan::new().insert(iter)
	}
}

impl IntoIterator for Multispan {
	type Item = Span;
	type IntoIter = alloc::vec::IntoIter<Span>;
	fn into_iter(self) -> Self::IntoIter {
		self.spans.into_iter()
	}
}
impl<'a> IntoIterator for &'a Multispan {
	type Item = &'a Span;
	type IntoIter = core::slice::Iter<'a, Span>;
	fn into_iter(self) -> Self::IntoIter {
		self.spans.iter()
	}
}

impl Index<usize> for Multispan {
	type Output = Span;
	fn index(&self, index: usize) -> &Self::Output {
		&self.spans[index]
	}
}

/// Formats the spans as a range-list, such as `"1-2,3,4-8"`.
///
/// [`parse()`] reads the text back into an equal `Multispan` only when the
/// spans are sorted by start and no endpoint is negative. A negative
/// endpoint prints with a leading `-` which the range-list format rejects.
impl fmt::Display for Multispan {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, span) in self.spans.iter().enumerate() {
			if i > 0 {
				f.write_str(",")?;
			}
			fmt::Display::fmt(span, f)?;
		}
		Ok(())
	}
}

impl FromStr for Multispan {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}
