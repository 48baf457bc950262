//! Column-name providers and row converters for protobuf messages.
//!
//! Each message type exposes its destination columns and a converter producing
//! values in the same order. The last column always holds the canonical binary
//! encoding of the whole message, next to the decomposed fields.

use log::debug;
use prost::Message;

use crate::error::Result;
use crate::util::row::{Row, Schema};

pub mod json;
pub mod labels;
pub mod search_request;
pub mod user;

pub use search_request::{search_request_column_names, search_request_to_tuple};
pub use user::{user_column_names, user_to_tuple};

/// Column holding the full encoded message.
pub const PROTO_BINARY_COLUMN: &str = "PROTO_BINARY";

pub trait RowMessage: Message + Default + Sized {
    /// Typed row, positionally aligned with `COLUMNS`.
    type Tuple;

    /// Unqualified message name, used as the table name.
    const TABLE: &'static str;

    /// Destination columns in insertion order, ending with `PROTO_BINARY_COLUMN`.
    const COLUMNS: &'static [&'static str];

    /// The columns joined with commas, ready for an INSERT column list.
    fn column_names() -> String {
        Self::COLUMNS.join(",")
    }

    /// Types of the decomposed columns; everything in `COLUMNS` but the last.
    fn schema() -> Schema;

    fn to_tuple(&self) -> Result<Self::Tuple>;

    fn to_row(&self) -> Result<Row>;
}

/// Decodes a canonical encoding of `M` and converts it into a row.
pub fn decode_row<M: RowMessage>(bytes: &[u8]) -> Result<Row> {
    let message = M::decode(bytes)?;
    debug!("decoded {} from {} bytes", M::TABLE, bytes.len());
    message.to_row()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{user::Stamps, SearchRequest, User};
    use crate::util::dbtype::Value;

    fn check_alignment<M: RowMessage>() {
        let schema = M::schema();
        assert_eq!(schema.len() + 1, M::COLUMNS.len());
        for ((name, _), column) in schema.iter().zip(M::COLUMNS) {
            assert_eq!(name, column);
        }
        assert_eq!(M::COLUMNS.last(), Some(&PROTO_BINARY_COLUMN));
    }

    #[test]
    fn test_schema_alignment() {
        check_alignment::<SearchRequest>();
        check_alignment::<User>();
    }

    #[test]
    fn test_row_length_matches_columns() {
        let request = SearchRequest {
            query: "rust".to_string(),
            page_number: 1,
            result_per_page: 10,
        };
        assert_eq!(request.to_row().unwrap().len(), SearchRequest::COLUMNS.len());

        let user = User {
            id: 1,
            username: "bob".to_string(),
            age: None,
            sgender: 0,
            s: String::new(),
            stamps: Some(Stamps::default()),
        };
        assert_eq!(user.to_row().unwrap().len(), User::COLUMNS.len());
    }

    #[test]
    fn test_decode_row() {
        let user = User {
            id: 9,
            username: "eve".to_string(),
            age: Some(30),
            sgender: 2,
            s: "x".to_string(),
            stamps: None,
        };
        let bytes = user.encode_to_vec();
        let row = decode_row::<User>(&bytes).unwrap();
        assert_eq!(row[0], Value::I64(9));
        assert_eq!(row[2], Value::I32(30));
        assert_eq!(row[3], Value::String("OTHER".to_string()));
        assert_eq!(row[6], Value::Bytes(bytes));
    }

    #[test]
    fn test_decode_row_garbage() {
        // Field 1 announced as length-delimited with a length past the end.
        let result = decode_row::<SearchRequest>(&[0x0a, 0x05, 0x61]);
        assert!(matches!(result, Err(crate::error::ConvertError::Decode(_))));
    }
}
