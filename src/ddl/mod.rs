//! CREATE TABLE statements for the tables the converters fill.

use itertools::Itertools;

use crate::convert::{RowMessage, PROTO_BINARY_COLUMN};
use crate::protocol::{SearchRequest, User};
use crate::util::dbtype::Column;

/// Renders the table for `M`, one column per field followed by the raw
/// encoding column.
pub fn create_table<M: RowMessage>() -> String {
    let definitions = M::schema()
        .into_iter()
        .chain(std::iter::once((PROTO_BINARY_COLUMN.to_string(), Column::Blob)))
        .map(|(name, column)| format!("\t{} {}", name, column.definition()))
        .join(",\n");
    format!("CREATE TABLE {} (\n{}\n);", M::TABLE, definitions)
}

/// Every table for foo.proto, in declaration order.
pub fn create_tables() -> String {
    [create_table::<SearchRequest>(), create_table::<User>()].join("\n\n")
}
