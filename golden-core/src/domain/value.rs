use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Cell contents that denote a missing value in the source table.
pub const MISSING_VALUE_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_MARKERS: [&str; 3] = ["True", "TRUE", "true"];
const FALSE_MARKERS: [&str; 3] = ["False", "FALSE", "false"];

/// A single cell of a [`crate::VesselRecord`].
///
/// Serializes to the matching JSON scalar, `Null` included, so a missing
/// numeric value is always `null` on the wire and never NaN.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Infers the typed value of a raw table cell.
    pub fn infer(cell: &str) -> Value {
        if MISSING_VALUE_MARKERS.contains(&cell) {
            Value::Null
        } else if TRUE_MARKERS.contains(&cell) {
            Value::Bool(true)
        } else if FALSE_MARKERS.contains(&cell) {
            Value::Bool(false)
        } else if let Ok(v) = cell.parse::<i64>() {
            Value::Int(v)
        } else if let Ok(v) = cell.parse::<f64>() {
            Value::from(v)
        } else {
            Value::Str(cell.to_string())
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Numeric equality against an integer, `1234567.0` equals `1234567`.
    pub fn eq_int(&self, other: i64) -> bool {
        match self {
            Value::Int(v) => *v == other,
            Value::Float(v) => *v == other as f64,
            Value::Null | Value::Bool(_) | Value::Str(_) => false,
        }
    }

    /// The textual form used for substring matching, `None` for missing values.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Str(v) => Some(v.clone()),
            v => Some(v.to_string()),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Value::Null
        } else {
            Value::Float(value)
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write_float(f, *v),
            Value::Str(v) => f.write_str(v),
        }
    }
}

/// Writes `value` in shortest round-trip form, always with a fractional part
/// or an exponent: `20.0`, `10.5`, `0.0001`, `1e-05`, `1e+16`.
pub(crate) fn write_float(f: &mut Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.write_str(&scientific);
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => ("-", m),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exponent) {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{sign}{mantissa}e{exponent_sign}{:02}", exponent.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        write!(f, "{sign}0.{zeros}{digits}")
    } else {
        let split = exponent as usize + 1;
        if digits.len() > split {
            write!(f, "{sign}{}.{}", &digits[..split], &digits[split..])
        } else {
            let zeros = "0".repeat(split - digits.len());
            write!(f, "{sign}{digits}{zeros}.0")
        }
    }
}
