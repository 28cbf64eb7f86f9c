use crate::error::{FormatError, TimeField};

use std::time::Duration;

use nom::bytes::complete::take_while_m_n;
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{all_consuming, map_res, verify};
use nom::IResult;

/// Separator between the start and end time of a timing line.
pub const TIME_SEPARATOR: &str = " --> ";

/// Parse a sequence number line. Only plain ASCII digits are accepted and the
/// value must be positive.
pub fn parse_sequence_number(line: &str) -> Result<u32, FormatError> {
    all_consuming(seq_num)(line)
        .map(|(_, number)| number)
        .map_err(|_| FormatError::SequenceNumber(line.to_string()))
}

/// Parse a `HH:MM:SS,mmm --> HH:MM:SS,mmm` line into its start and end times.
pub fn parse_timing_line(line: &str) -> Result<(Duration, Duration), FormatError> {
    let mut fields = line.split(TIME_SEPARATOR);
    let (start, end) = match (fields.next(), fields.next(), fields.next()) {
        (Some(start), Some(end), None) => (start, end),
        _ => return Err(FormatError::TimingLine(line.to_string())),
    };

    let start = parse_timestamp(TimeField::Start, start)?;
    let end = parse_timestamp(TimeField::End, end)?;
    Ok((start, end))
}

/// Parse a single `HH:MM:SS,mmm` timestamp. A period is accepted in place of
/// the comma. The whole of `value` must be consumed.
pub fn parse_timestamp(field: TimeField, value: &str) -> Result<Duration, FormatError> {
    all_consuming(timestamp)(value)
        .map(|(_, ts)| ts)
        .map_err(|_| FormatError::Timestamp {
            field,
            value: value.to_string(),
        })
}

fn seq_num(input: &str) -> IResult<&str, u32> {
    verify(map_res(digit1, |s: &str| s.parse::<u32>()), |n: &u32| *n > 0)(input)
}

fn timestamp(input: &str) -> IResult<&str, Duration> {
    let (input, hours) = verify(two_digits, |h: &u64| *h < 24)(input)?;
    let (input, _) = char(':')(input)?;
    let (input, minutes) = verify(two_digits, |m: &u64| *m < 60)(input)?;
    let (input, _) = char(':')(input)?;
    let (input, seconds) = verify(two_digits, |s: &u64| *s < 60)(input)?;
    let (input, _) = one_of(",.")(input)?;
    let (input, millis) = three_digits(input)?;

    Ok((
        input,
        Duration::from_millis(
            millis + seconds * 1000 + minutes * 60 * 1000 + hours * 60 * 60 * 1000,
        ),
    ))
}

fn two_digits(input: &str) -> IResult<&str, u64> {
    map_res(take_while_m_n(2, 2, is_digit), |s: &str| s.parse::<u64>())(input)
}

fn three_digits(input: &str) -> IResult<&str, u64> {
    map_res(take_while_m_n(3, 3, is_digit), |s: &str| s.parse::<u64>())(input)
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
