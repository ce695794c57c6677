//! A module containing the error types returned by [`Span`] arithmetic and
//! by [`parse()`].
//!
//! [`Span`]: crate::Span
//! [`parse()`]: crate::parse

use thiserror::Error;

/// The error returned by the pairwise [`Span`](crate::Span) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanError {
	/// Returned by [`Span::overlap()`](crate::Span::overlap) and
	/// [`Span::combine()`](crate::Span::combine) when the two spans share no
	/// point.
	#[error("spans do not overlap")]
	NoOverlap,
	/// Returned by [`Span::gap()`](crate::Span::gap) when the two spans
	/// share at least one point, so there is nothing between them.
	#[error("no gap between spans")]
	NoGap,
}

/// The error returned when a range-list string is malformed.
///
/// Every variant carries the byte offset into the input where the problem
/// was found.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
	/// A token (or one side of a dashed token) had no digits, as in `"1,,2"`,
	/// `"3-"` or a trailing comma.
	#[error("empty number at byte {position}")]
	EmptyToken {
		/// Offset where the missing number should have started.
		position: usize,
	},
	/// A byte other than an ASCII digit, `,` or `-` was found.
	#[error("unexpected byte {byte:#04x} at byte {position}")]
	InvalidDigit {
		/// The offending byte.
		byte: u8,
		/// Offset of the offending byte.
		position: usize,
	},
	/// A token contained more than one `-`, as in `"1-2-3"`.
	#[error("more than one '-' in the token at byte {position}")]
	TooManyDashes {
		/// Offset of the second dash.
		position: usize,
	},
	/// A number did not fit in an `i64`.
	#[error("number at byte {position} is too large")]
	Overflow {
		/// Offset where the number started.
		position: usize,
	},
}
