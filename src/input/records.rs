use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::scores::SubScores;

/// A sub-score field as it arrived, keeping "absent" apart from an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RawScore {
    #[default]
    Missing,
    Present(Value),
}

impl<'de> Deserialize<'de> for RawScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(RawScore::Present)
    }
}

impl RawScore {
    pub fn to_number(&self) -> f64 {
        match self {
            RawScore::Missing => f64::NAN,
            RawScore::Present(value) => coerce_number(value),
        }
    }
}

/// One entry of the remote collection. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub listening: RawScore,
    #[serde(default)]
    pub reading: RawScore,
    #[serde(default)]
    pub writing: RawScore,
    #[serde(default)]
    pub speaking: RawScore,
}

impl StudentRecord {
    pub fn sub_scores(&self) -> SubScores {
        SubScores::new(
            self.listening.to_number(),
            self.reading.to_number(),
            self.writing.to_number(),
            self.speaking.to_number(),
        )
    }

    pub fn id_key(&self) -> String {
        display_value(&self.id)
    }

    pub fn display_name(&self) -> String {
        display_value(&self.name)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Numeric coercion with the semantics of JavaScript `Number(value)`.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_str(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            // a single element goes through its string form first
            [only] => match only {
                Value::Null => 0.0,
                Value::Bool(_) | Value::Object(_) => f64::NAN,
                other => coerce_number(other),
            },
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

pub fn coerce_str(raw: &str) -> f64 {
    let s = raw.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return u128::from_str_radix(digits, radix)
            .map(|v| v as f64)
            .unwrap_or(f64::INFINITY);
    }

    if !is_decimal_literal(s) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

// WhiteSpace and LineTerminator as ECMAScript defines them; differs from char::is_whitespace
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{9}'..='\u{D}'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `[+-] digits [. digits] [(e|E) [+-] digits]`, with at least one mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0usize;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Decodes a response body into records. Array entries that are not objects are skipped.
pub fn parse_records(body: &[u8]) -> Result<ParsedRecords, super::FetchError> {
    let value: Value = serde_json::from_slice(body)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(super::FetchError::NotArray(value_kind(&other))),
    };

    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        if !item.is_object() {
            skipped += 1;
            continue;
        }
        records.push(serde_json::from_value(item)?);
    }
    Ok(ParsedRecords { records, skipped })
}

#[derive(Debug, Clone, Default)]
pub struct ParsedRecords {
    pub records: Vec<StudentRecord>,
    pub skipped: usize,
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/records.rs"]
mod tests;
