use crate::{Multispan, ParseError, Span};

/// Parses a range-list such as `"1,3-5,9"` into a [`Multispan`].
///
/// The text is a comma-separated list of tokens, each either a single
/// non-negative decimal number `N`, read as the point span `[N, N]`, or two
/// such numbers joined by a dash `A-B`, read as the span `[A, B]` exactly
/// as written (no swapping). Whitespace, signs and any other characters are
/// rejected. The empty string parses to an empty `Multispan`.
///
/// Each span is [inserted](Multispan::insert) as it is read, so the result
/// is sorted by start but overlapping spans are not combined; call
/// [`Multispan::normalize()`] for that.
///
/// # Errors
///
/// Returns a [`ParseError`] pointing at the first malformed token.
///
/// # Examples
/// ```
/// use multispan::{parse, ParseError, Span};
///
/// let ms = parse("12345-67890,1-2,3,4-8").unwrap();
///
/// assert_eq!(
/// 	ms.as_slice(),
/// 	[
/// 		Span::new(1, 2),
/// 		Span::new(3, 3),
/// 		Span::new(4, 8),
/// 		Span::new(12345, 67890),
/// 	]
/// );
///
/// assert_eq!(parse("1,,2"), Err(ParseError::EmptyToken { position: 2 }));
/// ```
pub fn parse(text: &str) -> Result<Multispan, ParseError> {
	let mut multispan = Multispan::new();
	if text.is_empty() {
		return Ok(multispan);
	}

	let mut offset = 0;
	for token in text.split(',') {
		let span = parse_token(token, offset).inspect_err(|err| {
			log::debug!("rejected range list {text:?}: {err}");
		})?;
		multispan = multispan.insert([span]);
		offset += token.len() + 1;
	}

	Ok(multispan)
}

fn parse_token(token: &str, offset: usize) -> Result<Span, ParseError> {
	match token.split_once('-') {
		None => {
			let point = parse_number(token, offset)?;
			Ok(Span {
				start: point,
				end: point,
			})
		}
		Some((start, end)) => {
			let end_offset = offset + start.len() + 1;
			if let Some(dash) = end.find('-') {
				return Err(ParseError::TooManyDashes {
					position: end_offset + dash,
				});
			}

			Ok(Span {
				start: parse_number(start, offset)?,
				end: parse_number(end, end_offset)?,
			})
		}
	}
}

//ascii base 10 only, no sign
fn parse_number(digits: &str, offset: usize) -> Result<i64, ParseError> {
	if digits.is_empty() {
		return Err(ParseError::EmptyToken { position: offset });
	}

	digits
		.bytes()
		.enumerate()
		.try_fold(0_i64, |number, (i, byte)| {
			if !byte.is_ascii_digit() {
				return Err(ParseError::InvalidDigit {
					byte,
					position: offset + i,
				});
			}

			number
				.checked_mul(10)
				.and_then(|number| number.checked_add(i64::from(byte - b'0')))
				.ok_or(ParseError::Overflow { position: offset })
		})
}
