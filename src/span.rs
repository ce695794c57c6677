//! A module containing [`Span`], a closed interval over `i64`.

use core::fmt;
use core::ops::{Bound, RangeBounds, RangeInclusive};

use crate::SpanError;

/// A closed interval `[start, end]` over `i64`, both ends are always
/// included.
///
/// Spans built with [`Span::new()`] are always normalized (`start <= end`),
/// but the fields are public so a span can also be written literally,
/// in which case no check is made. The pairwise operations assume
/// normalized spans.
///
/// # Examples
/// ```
/// use multispan::Span;
///
/// let a = Span::new(0, 6);
/// let b = Span::new(10, 5);
///
/// assert_eq!(b, Span { start: 5, end: 10 });
/// assert_eq!(a.overlap(b), Ok(Span::new(5, 6)));
/// assert_eq!(a.combine(b), Ok(Span::new(0, 10)));
/// assert!(a.gap(b).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
	/// The start of the span, inclusive.
	pub start: i64,
	/// The end of the span, inclusive.
	pub end: i64,
}

impl Span {
	/// The single-point span `[0, 0]`, also the [`Default`] span.
	pub const ZERO: Span = Span { start: 0, end: 0 };

	/// Makes a new normalized span, swapping `start` and `end` if they are
	/// given the wrong way round.
	///
	/// # Examples
	/// ```
	/// use multispan::Span;
	///
	/// assert_eq!(Span::new(10, 5), Span::new(5, 10));
	/// ```
	pub fn new(start: i64, end: i64) -> Span {
		Span { start, end }.normalize()
	}

	/// Returns the span with `start` and `end` swapped if `start > end`,
	/// otherwise the span unchanged.
	pub fn normalize(self) -> Span {
		if self.start <= self.end {
			return self;
		}

		Span {
			start: self.end,
			end: self.start,
		}
	}

	/// Returns `true` if `point` lies inside the span, both ends included.
	///
	/// # Examples
	/// ```
	/// use multispan::Span;
	///
	/// let span = Span::new(-2, 8);
	///
	/// assert!(span.contains(-2));
	/// assert!(span.contains(8));
	/// assert!(!span.contains(9));
	/// ```
	pub fn contains(&self, point: i64) -> bool {
		self.start <= point && point <= self.end
	}

	/// Returns `true` if the span holds exactly one point.
	pub fn is_point(&self) -> bool {
		self.start == self.end
	}

	/// Returns `true` if the two spans share at least one point.
	///
	/// Spans that only touch at a boundary, such as `[5, 6]` and `[6, 9]`,
	/// do overlap. Spans that are merely adjacent, such as `[5, 6]` and
	/// `[7, 9]`, do not.
	pub fn overlaps(&self, other: Span) -> bool {
		(self.end >= other.start && self.start <= other.end)
			|| (other.end >= self.start && other.start <= self.end)
	}

	/// Returns the intersection of the two spans.
	///
	/// # Errors
	///
	/// Returns [`SpanError::NoOverlap`] if the spans share no point.
	///
	/// # Examples
	/// ```
	/// use multispan::{Span, SpanError};
	///
	/// let a = Span::new(0, 6);
	///
	/// assert_eq!(a.overlap(Span::new(5, 10)), Ok(Span::new(5, 6)));
	/// assert_eq!(a.overlap(Span::new(8, 8)), Err(SpanError::NoOverlap));
	/// ```
	pub fn overlap(&self, other: Span) -> Result<Span, SpanError> {
		if !self.overlaps(other) {
			return Err(SpanError::NoOverlap);
		}

		Ok(Span {
			start: self.start.max(other.start),
			end: self.end.min(other.end),
		})
	}

	/// Returns the union of the two spans, which is a single span since
	/// they overlap.
	///
	/// # Errors
	///
	/// Returns [`SpanError::NoOverlap`] if the spans share no point.
	///
	/// # Examples
	/// ```
	/// use multispan::Span;
	///
	/// let a = Span::new(5, 10);
	///
	/// assert_eq!(a.combine(Span::new(10, 14)), Ok(Span::new(5, 14)));
	/// assert!(a.combine(Span::new(11, 14)).is_err());
	/// ```
	pub fn combine(&self, other: Span) -> Result<Span, SpanError> {
		if !self.overlaps(other) {
			return Err(SpanError::NoOverlap);
		}

		Ok(Span {
			start: self.start.min(other.start),
			end: self.end.max(other.end),
		})
	}

	/// Returns the span between two non-overlapping spans.
	///
	/// The gap runs from the end of the earlier span to the start of the
	/// later one, so it shares its boundary points with both inputs and
	/// combining either input with the gap succeeds.
	///
	/// # Errors
	///
	/// Returns [`SpanError::NoGap`] if the spans overlap.
	///
	/// # Examples
	/// ```
	/// use multispan::Span;
	///
	/// let a = Span::new(0, 6);
	/// let b = Span::new(10, 14);
	///
	/// assert_eq!(a.gap(b), Ok(Span::new(6, 10)));
	/// assert_eq!(b.gap(a), Ok(Span::new(6, 10)));
	/// ```
	pub fn gap(&self, other: Span) -> Result<Span, SpanError> {
		if self.overlaps(other) {
			return Err(SpanError::NoGap);
		}

		if self.start < other.start {
			Ok(Span {
				start: self.end,
				end: other.start,
			})
		} else {
			Ok(Span {
				start: other.end,
				end: self.start,
			})
		}
	}
}

impl From<RangeInclusive<i64>> for Span {
	fn from(range: RangeInclusive<i64>) -> Self {
		let (start, end) = range.into_inner();
		Span::new(start, end)
	}
}

impl RangeBounds<i64> for Span {
	fn start_bound(&self) -> Bound<&i64> {
		Bound::Included(&self.start)
	}

	fn end_bound(&self) -> Bound<&i64> {
		Bound::Included(&self.end)
	}
}

/// Formats the span as a range-list token: `"N"` for a point span and
/// `"A-B"` otherwise.
impl fmt::Display for Span {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_point() {
			write!(f, "{}", self.start)
		} else {
			write!(f, "{}-{}", self.start, self.end)
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::string::ToString;

	use pretty_assertions::assert_eq;

	use super::*;

	//    000000000011111
	//    012345678901234
	// a: *******--------
	// b: -----******----
	// c: --------*------
	// d: ----------*****
	fn fixtures() -> [Span; 4] {
		[
			Span { start: 0, end: 6 },
			Span { start: 5, end: 10 },
			Span { start: 8, end: 8 },
			Span { start: 10, end: 14 },
		]
	}

	//go a bit around on either side of the fixtures
	const NUMBERS_DOMAIN: &[i64] = &[-1, 0, 1, 2, 3, 4, 5, 6, 7];

	fn all_spans() -> impl Iterator<Item = Span> + Clone {
		NUMBERS_DOMAIN.iter().flat_map(|&start| {
			NUMBERS_DOMAIN
				.iter()
				.filter(move |&&end| end >= start)
				.map(move |&end| Span { start, end })
		})
	}

	fn assert_pairwise(
		op: fn(&Span, Span) -> Result<Span, SpanError>,
		expected: [[Result<Span, SpanError>; 4]; 4],
	) {
		let spans = fixtures();
		for (i, a) in spans.iter().enumerate() {
			for (j, b) in spans.iter().enumerate() {
				assert_eq!(op(a, *b), expected[i][j], "a = {a:?}, b = {b:?}");
			}
		}
	}

	#[test]
	fn new_normalizes() {
		let want = Span { start: 5, end: 10 };
		assert_eq!(Span::new(10, 5), want);
		assert_eq!(Span::new(5, 10), want);
	}

	#[test]
	fn normalize_tests() {
		let want = Span::new(4, 8);
		assert_eq!(Span { start: 8, end: 4 }.normalize(), want);
		assert_eq!(Span { start: 4, end: 8 }.normalize(), want);
	}

	#[test]
	fn is_point_tests() {
		assert!(!Span { start: 5, end: 6 }.is_point());
		assert!(Span { start: 6, end: 6 }.is_point());
		assert!(Span::ZERO.is_point());
	}

	#[test]
	fn contains_tests() {
		let span = Span { start: -2, end: 8 };
		assert!(span.contains(0));
		assert!(span.contains(-2));
		assert!(span.contains(8));
		assert!(!span.contains(-1234));
		assert!(!span.contains(33));
	}

	#[test]
	fn overlaps_tests() {
		let expected = [
			[true, true, false, false],
			[true, true, true, true],
			[false, true, true, false],
			[false, true, false, true],
		];
		let spans = fixtures();
		for (i, a) in spans.iter().enumerate() {
			for (j, b) in spans.iter().enumerate() {
				assert_eq!(a.overlaps(*b), expected[i][j], "a = {a:?}, b = {b:?}");
			}
		}
	}

	#[test]
	fn overlap_tests() {
		let [a, b, c, d] = fixtures();
		let no = Err(SpanError::NoOverlap);
		assert_pairwise(
			Span::overlap,
			[
				[Ok(a), Ok(Span::new(5, 6)), no, no],
				[Ok(Span::new(5, 6)), Ok(b), Ok(c), Ok(Span::new(10, 10))],
				[no, Ok(c), Ok(c), no],
				[no, Ok(Span::new(10, 10)), no, Ok(d)],
			],
		);
	}

	#[test]
	fn combine_tests() {
		let [a, b, c, d] = fixtures();
		let no = Err(SpanError::NoOverlap);
		assert_pairwise(
			Span::combine,
			[
				[Ok(a), Ok(Span::new(0, 10)), no, no],
				[Ok(Span::new(0, 10)), Ok(b), Ok(b), Ok(Span::new(5, 14))],
				[no, Ok(b), Ok(c), no],
				[no, Ok(Span::new(5, 14)), no, Ok(d)],
			],
		);
	}

	#[test]
	fn gap_tests() {
		let no = Err(SpanError::NoGap);
		assert_pairwise(
			Span::gap,
			[
				[no, no, Ok(Span::new(6, 8)), Ok(Span::new(6, 10))],
				[no, no, no, no],
				[Ok(Span::new(6, 8)), no, no, Ok(Span::new(8, 10))],
				[Ok(Span::new(6, 10)), no, Ok(Span::new(8, 10)), no],
			],
		);
	}

	#[test]
	fn adjacent_spans_do_not_overlap() {
		let a = Span::new(1, 4);
		let b = Span::new(5, 6);
		assert!(!a.overlaps(b));
		assert_eq!(a.combine(b), Err(SpanError::NoOverlap));
		assert_eq!(a.gap(b), Ok(Span::new(4, 5)));
	}

	#[test]
	fn overlaps_is_symmetric() {
		for a in all_spans() {
			for b in all_spans() {
				assert_eq!(a.overlaps(b), b.overlaps(a), "a = {a:?}, b = {b:?}");
			}
		}
	}

	#[test]
	fn combine_is_the_minimal_union() {
		for a in all_spans() {
			for b in all_spans().filter(|b| a.overlaps(*b)) {
				let combined = a.combine(b).unwrap();
				assert_eq!(combined, b.combine(a).unwrap());
				for point in NUMBERS_DOMAIN.iter().copied() {
					assert_eq!(
						combined.contains(point),
						a.contains(point) || b.contains(point),
						"a = {a:?}, b = {b:?}, point = {point}"
					);
				}
			}
		}
	}

	#[test]
	fn overlap_is_the_exact_intersection() {
		for a in all_spans() {
			for b in all_spans().filter(|b| a.overlaps(*b)) {
				let overlap = a.overlap(b).unwrap();
				assert_eq!(overlap, b.overlap(a).unwrap());
				for point in NUMBERS_DOMAIN.iter().copied() {
					assert_eq!(
						overlap.contains(point),
						a.contains(point) && b.contains(point),
						"a = {a:?}, b = {b:?}, point = {point}"
					);
				}
			}
		}
	}

	#[test]
	fn gap_bridges_non_overlapping_spans() {
		for a in all_spans() {
			for b in all_spans().filter(|b| !a.overlaps(*b)) {
				let gap = a.gap(b).unwrap();
				assert_eq!(gap, b.gap(a).unwrap());

				let left = a.combine(gap).unwrap();
				let right = gap.combine(b).unwrap();
				assert!(left.combine(right).is_ok(), "a = {a:?}, b = {b:?}");
			}
		}
	}

	#[test]
	fn from_range_inclusive() {
		assert_eq!(Span::from(3..=7), Span::new(3, 7));
		assert_eq!(Span::from(7..=3), Span::new(3, 7));
	}

	#[test]
	fn range_bounds_are_inclusive() {
		let span = Span::new(3, 7);
		assert!(RangeBounds::contains(&span, &3));
		assert!(RangeBounds::contains(&span, &7));
		assert!(!RangeBounds::contains(&span, &8));
	}

	#[test]
	fn display_tests() {
		assert_eq!(Span::new(9, 9).to_string(), "9");
		assert_eq!(Span::new(3, 5).to_string(), "3-5");
	}
}
