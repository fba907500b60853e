//! Numeric literal classification.
//!
//! Turns a raw numeric token from the content-stream tokenizer into a typed
//! [`PdfNumber`]. Real-world producers emit plenty of malformed reals, so real
//! parsing salvages a value whenever the token carries at least one digit.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{PdfError, Result};

/// A classified PDF numeric operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PdfNumber {
    Integer(i64),
    Real(f64),
}

impl PdfNumber {
    pub const ZERO: PdfNumber = PdfNumber::Integer(0);

    pub const fn is_integer(&self) -> bool {
        matches!(self, PdfNumber::Integer(_))
    }

    /// Widens to `f64`. Integers beyond 2^53 round to the nearest double.
    pub fn as_f64(&self) -> f64 {
        match *self {
            PdfNumber::Integer(n) => n as f64,
            PdfNumber::Real(v) => v,
        }
    }

    /// Narrows to `f32`, clamping to the finite `f32` range.
    pub fn as_f32(&self) -> f32 {
        self.as_f64().clamp(f32::MIN as f64, f32::MAX as f64) as f32
    }

    /// Reals truncate toward zero and saturate at the `i64` bounds.
    pub fn as_i64(&self) -> i64 {
        match *self {
            PdfNumber::Integer(n) => n,
            PdfNumber::Real(v) => v as i64,
        }
    }

    /// Integers keep their low 32 bits; reals truncate toward zero and
    /// saturate at the `i32` bounds.
    pub fn as_i32(&self) -> i32 {
        match *self {
            PdfNumber::Integer(n) => n as i32,
            PdfNumber::Real(v) => v as i32,
        }
    }
}

impl From<i64> for PdfNumber {
    fn from(n: i64) -> Self {
        PdfNumber::Integer(n)
    }
}

impl From<f64> for PdfNumber {
    fn from(v: f64) -> Self {
        PdfNumber::Real(v)
    }
}

impl fmt::Display for PdfNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfNumber::Integer(n) => write!(f, "{}", n),
            // Debug keeps the fractional part ("12.0"), so reals never print as integers.
            PdfNumber::Real(v) => write!(f, "{:?}", v),
        }
    }
}

impl FromStr for PdfNumber {
    type Err = PdfError;

    fn from_str(s: &str) -> Result<Self> {
        parse_number(s)
    }
}

/// Classify and parse a numeric token.
///
/// - A single character: a digit is that integer; a lone `-` or `.` is zero
///   (seen from broken producers); anything else is malformed.
/// - No `.` and no exponent marker: must parse as an `i64`. Overflow is an
///   error, it never falls back to a real.
/// - Otherwise the token is a real and goes through [`parse_real`].
pub fn parse_number(token: &str) -> Result<PdfNumber> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return match c {
            '0'..='9' => Ok(PdfNumber::Integer(i64::from(c as u8 - b'0'))),
            '-' | '.' => Ok(PdfNumber::ZERO),
            _ => Err(PdfError::MalformedNumber(token.to_string())),
        };
    }

    if !token.contains(['.', 'e', 'E']) {
        return token
            .parse::<i64>()
            .map(PdfNumber::Integer)
            .map_err(|_| PdfError::MalformedNumber(token.to_string()));
    }

    parse_real(token).map(PdfNumber::Real)
}

/// Leniently parse a real literal.
///
/// Salvage policy, first match wins:
/// 1. no ASCII digit anywhere: malformed
/// 2. the token parses as a plain real
/// 3. the token is normalised: a run of leading signs collapses to one
///    (`--16.33`, `+-2.5`), then a minus after a zero fraction moves to the
///    front (`0.00-339`, `0.-262`); the result parses as a plain real
/// 4. the longest real prefix of the normalised token (`1.2.3`, `.5-`, `1e`,
///    `--1.2.3`)
/// 5. anything else with a digit in it is `0.0`
///
/// Results outside the `f64` range saturate to `±f64::MAX`.
pub fn parse_real(token: &str) -> Result<f64> {
    if !token.bytes().any(|b| b.is_ascii_digit()) {
        return Err(PdfError::MalformedNumber(token.to_string()));
    }
    if let Some(value) = parse_plain_real(token) {
        return Ok(value);
    }

    let normalised = normalise_real(token);
    let candidate = normalised.as_deref().unwrap_or(token);
    let value = normalised
        .as_deref()
        .and_then(parse_plain_real)
        .or_else(|| {
            real_prefix_len(candidate.as_bytes())
                .and_then(|end| parse_plain_real(&candidate[..end]))
        })
        .unwrap_or(0.0);
    debug!(token, value, "salvaged malformed real literal");
    Ok(value)
}

#[inline]
fn is_real_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E')
}

/// Strict parse restricted to the numeric literal alphabet, so spellings such
/// as `inf` or `NaN` are never accepted.
fn parse_plain_real(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(is_real_byte) {
        return None;
    }
    let v: f64 = s.parse().ok()?;
    Some(if v.is_infinite() {
        f64::MAX.copysign(v)
    } else {
        v
    })
}

/// Applies the sign rewrites in order; `None` when neither changes the token.
fn normalise_real(token: &str) -> Option<String> {
    let collapsed = collapse_leading_signs(token);
    let base = collapsed.as_deref().unwrap_or(token);
    match move_misplaced_minus(base) {
        Some(moved) => Some(moved),
        None => collapsed,
    }
}

fn collapse_leading_signs(token: &str) -> Option<String> {
    let run = token.bytes().take_while(|b| matches!(b, b'+' | b'-')).count();
    if run < 2 {
        return None;
    }
    let minuses = token[..run].bytes().filter(|&b| b == b'-').count();
    let rest = &token[run..];
    Some(if minuses % 2 == 1 {
        format!("-{}", rest)
    } else {
        rest.to_string()
    })
}

/// Matches `0.<zeros>-<digits>` exactly.
fn move_misplaced_minus(token: &str) -> Option<String> {
    let rest = token.strip_prefix("0.")?;
    let rest = rest.trim_start_matches('0');
    let digits = rest.strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("-{}", token.replacen('-', "", 1)))
}

/// Length of the longest prefix of `s` that is a well-formed real:
/// `[sign] digits [. digits] [(e|E) [sign] digits]` with at least one
/// mantissa digit. An exponent without digits is left out of the prefix.
///
/// Single forward pass; the prefix is parsed once by the caller.
fn real_prefix_len(s: &[u8]) -> Option<usize> {
    fn skip_digits(s: &[u8], mut i: usize) -> usize {
        while i < s.len() && s[i].is_ascii_digit() {
            i += 1;
        }
        i
    }

    let mut i = 0;
    if matches!(s.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_end = skip_digits(s, i);
    let mut mantissa_digits = int_end - i;
    i = int_end;
    if s.get(i) == Some(&b'.') {
        let frac_end = skip_digits(s, i + 1);
        mantissa_digits += frac_end - (i + 1);
        i = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(s.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(s.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = skip_digits(s, j);
        if exp_end > j {
            i = exp_end;
        }
    }
    Some(i)
}
