//! Scalar cell values and their native comparison rules.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar read from a record field.
///
/// `Undefined` is what a missing field reads as; it is displayed as
/// `undefined` and never compares less or greater than anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    #[default]
    Undefined,
}

impl Value {
    /// Numeric reading of the value.
    ///
    /// Text is trimmed first; blank text is zero and anything unparsable is
    /// NaN. `Undefined` is always NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Text(s) => parse_number(s),
            Value::Undefined => f64::NAN,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Native less-than: strings by UTF-16 code units, everything else
    /// numerically. Any comparison involving NaN is false.
    pub fn less_than(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.encode_utf16().lt(b.encode_utf16()),
            _ => self.to_number() < other.to_number(),
        }
    }

    /// Three-way comparison built from [`less_than`](Self::less_than) in both
    /// directions. Pairs that are neither less nor greater compare equal, so
    /// this is not a total order once NaN or `Undefined` is involved.
    pub fn compare(&self, other: &Value) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if other.less_than(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust also accepts "inf"/"nan" spellings, which are not numbers here.
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'i') || c.eq_ignore_ascii_case(&'n'))
    {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // Covers -0 as well.
        f.write_str("0")
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => format_number(*n, f),
            Value::Text(s) => f.write_str(s),
            Value::Undefined => f.write_str("undefined"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_rejects_rust_only_spellings() {
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("-infinity").is_nan());
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_number_trims_and_defaults_blank_to_zero() {
        assert_eq!(parse_number("  42 "), 42.0);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert!(parse_number("12px").is_nan());
    }
}
