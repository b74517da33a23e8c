//! Typed attribute values and the field descriptors that produce them.

use crate::error::{ModelError, ModelResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar-date format used by every date attribute in the distribution.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single column value, already converted from its wire string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Absent attribute. Empty date attributes map here, never to a clock default.
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
}

impl Value {
    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

/// The storage type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Integer,
    Real,
    Text,
    Bool,
    Date,
}

impl FieldType {
    /// SQL column type used when the store derives its DDL.
    pub fn sql_type(self) -> &'static str {
        match self {
            FieldType::Integer | FieldType::Bool => "INTEGER",
            FieldType::Real => "REAL",
            FieldType::Text | FieldType::Date => "TEXT",
        }
    }

    fn name(self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Real => "real",
            FieldType::Text => "text",
            FieldType::Bool => "boolean",
            FieldType::Date => "date",
        }
    }
}

/// Where a field's value sits in the record element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// An XML attribute on the record element.
    Attribute,
    /// The text of a direct child element.
    ElementText,
}

/// Maps one wire attribute onto one store column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Attribute (or child element) name in the export XML, e.g. `SID`, `dateStart`.
    pub attribute: &'static str,
    /// Column name in the entity table.
    pub column: &'static str,
    pub ty: FieldType,
    pub source: FieldSource,
}

impl Field {
    const fn new(attribute: &'static str, column: &'static str, ty: FieldType) -> Self {
        Self {
            attribute,
            column,
            ty,
            source: FieldSource::Attribute,
        }
    }

    /// Text field read from a child element instead of an attribute.
    pub const fn element_text(element: &'static str, column: &'static str) -> Self {
        Self {
            attribute: element,
            column,
            ty: FieldType::Text,
            source: FieldSource::ElementText,
        }
    }

    /// Shorthand for an integer field.
    pub const fn integer(attribute: &'static str, column: &'static str) -> Self {
        Self::new(attribute, column, FieldType::Integer)
    }

    /// Shorthand for a floating-point field.
    pub const fn real(attribute: &'static str, column: &'static str) -> Self {
        Self::new(attribute, column, FieldType::Real)
    }

    /// Shorthand for a text field.
    pub const fn text(attribute: &'static str, column: &'static str) -> Self {
        Self::new(attribute, column, FieldType::Text)
    }

    /// Shorthand for a boolean field.
    pub const fn boolean(attribute: &'static str, column: &'static str) -> Self {
        Self::new(attribute, column, FieldType::Bool)
    }

    /// Shorthand for a calendar-date field.
    pub const fn date(attribute: &'static str, column: &'static str) -> Self {
        Self::new(attribute, column, FieldType::Date)
    }

    /// Converts a raw attribute string. Missing or empty input yields [`Value::Null`].
    pub fn parse(&self, raw: Option<&str>) -> ModelResult<Value> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(Value::Null),
            Some(raw) => raw,
        };
        let invalid = || ModelError::InvalidValue {
            attribute: self.attribute,
            expected: self.ty.name(),
            raw: raw.to_string(),
        };
        match self.ty {
            FieldType::Integer => raw.parse().map(Value::Integer).map_err(|_| invalid()),
            FieldType::Real => raw.parse().map(Value::Real).map_err(|_| invalid()),
            FieldType::Text => Ok(Value::Text(raw.to_string())),
            FieldType::Bool => match raw {
                "1" | "true" => Ok(Value::Bool(true)),
                "0" | "false" => Ok(Value::Bool(false)),
                _ => Err(invalid()),
            },
            FieldType::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(Value::Date)
                .map_err(|_| invalid()),
        }
    }
}
