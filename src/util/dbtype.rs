use std::fmt;

use itertools::Itertools;

use crate::convert::labels::LabelTable;

/// A single cell of an insertable row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    I32(i32),
    I64(i64),
    String(String),
    Bytes(Vec<u8>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::I32(i) => write!(f, "{}", i),
            Value::I64(i) => write!(f, "{}", i),
            Value::String(s) => write!(f, "{}", s),
            Value::Bytes(b) => b.iter().try_for_each(|byte| write!(f, "{:02x}", byte)),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// MySQL column types that protobuf fields map onto.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int,
    BigInt,
    Text,
    Blob,
    // Nested messages and repeated fields are stored as JSON text.
    Json,
    Enum(&'static LabelTable),
    Nullable(Box<Column>),
}

impl Column {
    pub fn sql_type(&self) -> String {
        match self {
            Column::Int => "INT".to_string(),
            Column::BigInt => "BIGINT".to_string(),
            Column::Text => "TEXT".to_string(),
            Column::Blob => "BLOB".to_string(),
            Column::Json => "JSON".to_string(),
            Column::Enum(table) => format!(
                "ENUM({})",
                table.labels().map(|l| format!("\"{}\"", l)).join(",")
            ),
            Column::Nullable(inner) => inner.sql_type(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Column::Nullable(_))
    }

    /// Column definition without the name, e.g. "INT NOT NULL".
    pub fn definition(&self) -> String {
        let nullable = if self.is_nullable() { "NULL" } else { "NOT NULL" };
        format!("{} {}", self.sql_type(), nullable)
    }
}
