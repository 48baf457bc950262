use super::dbtype::{Column, Value};

pub type Row = Vec<Value>;

pub type SchemaCol = (String, Column);
pub type Schema = Vec<SchemaCol>;
