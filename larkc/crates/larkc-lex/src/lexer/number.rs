//! Number literal lexing.
//!
//! Float: `[+-]? digit* '.' digit+`. Integer: `[+-]? digit+`. Both must be
//! followed by a delimiter or the end of input, which is not consumed. A
//! digit run glued to anything else (`15x`) matches neither.

use super::Step;
use crate::error::LexError;
use crate::token::{at_delimiter, Token};

/// Length of an optional leading sign.
fn sign_len(input: &str) -> usize {
    usize::from(input.starts_with(['+', '-']))
}

/// Length of the ASCII digit run at the start of `input`.
fn digit_run(input: &str) -> usize {
    input.bytes().take_while(u8::is_ascii_digit).count()
}

/// Matches a float literal such as `15.41`, `-.5` or `+3.0`.
pub fn match_float(input: &str) -> Option<Step<'_>> {
    let dot = sign_len(input) + digit_run(&input[sign_len(input)..]);
    let fraction = input[dot..].strip_prefix('.')?;
    let fraction_len = digit_run(fraction);
    if fraction_len == 0 {
        return None;
    }

    let (text, rest) = input.split_at(dot + 1 + fraction_len);
    if !at_delimiter(rest) {
        return None;
    }

    Some(match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Step::Emit {
            token: Token::Float(value),
            rest,
        },
        _ => Step::Fail {
            error: LexError::NumberOutOfRange {
                text: text.to_string(),
            },
        },
    })
}

/// Matches an integer literal such as `42` or `-7`.
pub fn match_int(input: &str) -> Option<Step<'_>> {
    let sign = sign_len(input);
    let digits = digit_run(&input[sign..]);
    if digits == 0 {
        return None;
    }

    let (text, rest) = input.split_at(sign + digits);
    if !at_delimiter(rest) {
        return None;
    }

    Some(match text.parse::<i64>() {
        Ok(value) => Step::Emit {
            token: Token::Int(value),
            rest,
        },
        Err(_) => Step::Fail {
            error: LexError::NumberOutOfRange {
                text: text.to_string(),
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(step: Option<Step<'_>>) -> Option<(Token, &str)> {
        match step {
            Some(Step::Emit { token, rest }) => Some((token, rest)),
            _ => None,
        }
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(emitted(match_int("42")), Some((Token::Int(42), "")));
        assert_eq!(emitted(match_int("0")), Some((Token::Int(0), "")));
        assert_eq!(emitted(match_int("007;")), Some((Token::Int(7), ";")));
    }

    #[test]
    fn test_signed_integer() {
        assert_eq!(emitted(match_int("-7")), Some((Token::Int(-7), "")));
        assert_eq!(emitted(match_int("+7 x")), Some((Token::Int(7), " x")));
    }

    #[test]
    fn test_integer_needs_delimiter() {
        assert!(match_int("15x").is_none());
        assert!(match_int("15\"").is_none());
        assert!(match_int("-").is_none());
        assert!(match_int("x1").is_none());
    }

    #[test]
    fn test_integer_before_period() {
        assert_eq!(emitted(match_int("5.")), Some((Token::Int(5), ".")));
    }

    #[test]
    fn test_integer_out_of_range() {
        let step = match_int("99999999999999999999 1");
        assert!(matches!(
            step,
            Some(Step::Fail { error: LexError::NumberOutOfRange { ref text } }) if text == "99999999999999999999"
        ));
    }

    #[test]
    fn test_integer_extremes() {
        assert_eq!(
            emitted(match_int("-9223372036854775808")),
            Some((Token::Int(i64::MIN), ""))
        );
    }

    #[test]
    fn test_float() {
        assert_eq!(emitted(match_float("15.41")), Some((Token::Float(15.41), "")));
        assert_eq!(emitted(match_float("-2.5)")), Some((Token::Float(-2.5), ")")));
    }

    #[test]
    fn test_float_without_integer_part() {
        assert_eq!(emitted(match_float(".5")), Some((Token::Float(0.5), "")));
        assert_eq!(emitted(match_float("-.5")), Some((Token::Float(-0.5), "")));
    }

    #[test]
    fn test_float_needs_fraction_digits() {
        assert!(match_float("5.").is_none());
        assert!(match_float("5. ").is_none());
        assert!(match_float(".").is_none());
        assert!(match_float("42").is_none());
    }

    #[test]
    fn test_float_followed_by_period() {
        assert_eq!(
            emitted(match_float("1.2.3")),
            Some((Token::Float(1.2), ".3"))
        );
    }

    #[test]
    fn test_float_needs_delimiter() {
        assert!(match_float("1.5e3").is_none());
        assert!(match_float("1.5x").is_none());
    }

    #[test]
    fn test_float_out_of_range() {
        let huge = format!("{}.0", "9".repeat(400));
        assert!(matches!(
            match_float(&huge),
            Some(Step::Fail { error: LexError::NumberOutOfRange { .. } })
        ));
    }
}
