//! Host number coercion
//!
//! "change by" and sequence deletion treat their operands the way the block
//! host's `Number()` does. NaN is returned for anything that is not numeric;
//! callers decide what NaN means for them.

use serde_json::{Number, Value};

/// Coerce an optional value to a number
///
/// | Input | Result |
/// |-------|--------|
/// | absent | NaN |
/// | null | 0 |
/// | bool | 0 / 1 |
/// | number | itself |
/// | string | [`parse_number`] |
/// | array / object | NaN |
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_number(s),
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

/// Parse text as the host parses numeric strings
///
/// Surrounding whitespace is ignored and empty text is 0. Accepts decimal
/// literals with optional sign and exponent, `0x`/`0o`/`0b` integers and a
/// signed `Infinity`. Everything else is NaN.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let bytes = s.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_radix(&s[2..], radix);
        }
    }

    // f64::from_str also accepts "inf" and "nan" spellings; the host does not
    let decimal_chars = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal_chars {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut result = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => result = result * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    result
}

/// Convert an arithmetic result back into a stored value
///
/// Integral results within `i64` are stored as integers so they print
/// without a fractional part. Non-finite results become null, which is what
/// JSON serialization of such a value yields.
pub fn number_value(n: f64) -> Value {
    if !n.is_finite() {
        return Value::Null;
    }
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}

/// Interpret a path segment as a sequence position for deletion
///
/// The segment is coerced like any numeric string; blank text and values
/// with a fractional part are rejected rather than truncated.
pub fn integer_index(segment: &str) -> Option<usize> {
    if segment.trim().is_empty() {
        return None;
    }
    let n = parse_number(segment);
    if !n.is_finite() || n.fract() != 0.0 || n < 0.0 {
        return None;
    }
    if n > usize::MAX as f64 {
        return None;
    }
    Some(n as usize)
}
