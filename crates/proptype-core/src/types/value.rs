//! Typed property values and their string forms.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::{ObjectKind, PropertyCategory};

/// A registry-resolved domain object, referenced in storage by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainObject {
    pub kind: ObjectKind,
    pub id: i64,
    pub name: String,
}

impl DomainObject {
    pub fn new(kind: ObjectKind, id: i64, name: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for DomainObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A property value after coercion from its raw string.
///
/// The registry's "none" object has no variant here: object getters return
/// `None` for it instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    Boolean(bool),
    Number(f64),
    List(Vec<String>),
    Object(DomainObject),
    String(String),
}

impl TypedValue {
    /// The category this value belongs to. Lists are stored as plain strings.
    pub fn category(&self) -> PropertyCategory {
        match self {
            Self::Boolean(_) => PropertyCategory::Boolean,
            Self::Number(_) => PropertyCategory::Numeric,
            Self::List(_) | Self::String(_) => PropertyCategory::String,
            Self::Object(obj) => PropertyCategory::Object(obj.kind),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&DomainObject> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn into_object(self) -> Option<DomainObject> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::List(items) => f.write_str(&items.join(",")),
            Self::Object(obj) => write!(f, "{obj}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for TypedValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for TypedValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for TypedValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<DomainObject> for TypedValue {
    fn from(value: DomainObject) -> Self {
        Self::Object(value)
    }
}

/// Format a number the way the host scripting layer stringifies numbers:
/// `42`, `0.5`, `NaN`, `Infinity`, `1e+21`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    format!("{n}")
}

/// Parse a raw string as a number. Never fails: unparseable input is NaN.
///
/// Surrounding whitespace is ignored and a blank string is zero. Only
/// base-10 decimal and exponent forms plus `Infinity` are accepted.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust also accepts "inf", "nan" and friends; those are not numbers here.
    if trimmed
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Coerce a raw property value to a number the way the host's getters do.
///
/// Accepts everything [`parse_number`] accepts plus unsigned `0x`, `0o` and
/// `0b` literals. Signs are not allowed on prefixed literals.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let prefixed = trimmed
        .get(..2)
        .and_then(|prefix| match prefix {
            "0x" | "0X" => Some(16),
            "0o" | "0O" => Some(8),
            "0b" | "0B" => Some(2),
            _ => None,
        })
        .map(|radix| (radix, &trimmed[2..]));

    match prefixed {
        Some((_, "")) => f64::NAN,
        Some((radix, digits)) => digits
            .chars()
            .try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN),
        None => parse_number(trimmed),
    }
}

/// Conversion into the raw string written to storage.
///
/// `None` becomes the empty string, which reads back as absent.
pub trait IntoRawValue {
    fn into_raw_value(self) -> String;
}

impl IntoRawValue for bool {
    fn into_raw_value(self) -> String {
        self.to_string()
    }
}

impl IntoRawValue for f64 {
    fn into_raw_value(self) -> String {
        format_number(self)
    }
}

macro_rules! integer_raw_value {
    ($($t:ty),*) => {
        $(
            impl IntoRawValue for $t {
                fn into_raw_value(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_raw_value!(i32, i64, u32, u64, usize);

impl IntoRawValue for &str {
    fn into_raw_value(self) -> String {
        self.to_string()
    }
}

impl IntoRawValue for String {
    fn into_raw_value(self) -> String {
        self
    }
}

impl IntoRawValue for &String {
    fn into_raw_value(self) -> String {
        self.clone()
    }
}

impl IntoRawValue for Vec<String> {
    fn into_raw_value(self) -> String {
        self.join(",")
    }
}

impl IntoRawValue for &[&str] {
    fn into_raw_value(self) -> String {
        self.join(",")
    }
}

impl IntoRawValue for DomainObject {
    fn into_raw_value(self) -> String {
        self.name
    }
}

impl IntoRawValue for &DomainObject {
    fn into_raw_value(self) -> String {
        self.name.clone()
    }
}

impl IntoRawValue for TypedValue {
    fn into_raw_value(self) -> String {
        self.to_string()
    }
}

impl IntoRawValue for &TypedValue {
    fn into_raw_value(self) -> String {
        self.to_string()
    }
}

impl<T: IntoRawValue> IntoRawValue for Option<T> {
    fn into_raw_value(self) -> String {
        self.map(IntoRawValue::into_raw_value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_format_without_trailing_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn parse_number_tolerates_whitespace() {
        assert_eq!(parse_number(" 7 "), 7.0);
        assert_eq!(parse_number("-1.25"), -1.25);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
    }

    #[test]
    fn parse_number_rejects_non_decimal_forms() {
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("0x10").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("1,000").is_nan());
    }

    #[test]
    fn coerce_number_reads_radix_prefixes() {
        assert_eq!(coerce_number("0x1f"), 31.0);
        assert_eq!(coerce_number("0XfF"), 255.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number(" 0x10 "), 16.0);
        assert_eq!(coerce_number("12.5"), 12.5);
        assert_eq!(coerce_number(""), 0.0);
    }

    #[test]
    fn coerce_number_rejects_malformed_prefixes() {
        assert!(coerce_number("0x").is_nan());
        assert!(coerce_number("0xg").is_nan());
        assert!(coerce_number("0b102").is_nan());
        assert!(coerce_number("0x+1").is_nan());
        assert!(coerce_number("-0x1f").is_nan());
        assert!(coerce_number("seven").is_nan());
    }

    #[test]
    fn none_becomes_empty_raw_value() {
        let missing: Option<i64> = None;
        assert_eq!(missing.into_raw_value(), "");
        assert_eq!(Some(true).into_raw_value(), "true");
    }

    #[test]
    fn lists_and_objects_use_natural_string_form() {
        let list = vec!["a".to_string(), "b c".to_string()];
        assert_eq!(list.into_raw_value(), "a,b c");
        let obj = DomainObject::new(ObjectKind::Monster, 1, "fluffy bunny");
        assert_eq!(TypedValue::Object(obj).to_string(), "fluffy bunny");
    }
}
