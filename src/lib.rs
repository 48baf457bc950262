//! Maps protobuf messages onto flat rows for relational insertion.
//!
//! For every message type in `proto/foo.proto` the crate provides the ordered
//! destination column names, a converter producing values in that order, and
//! the matching `CREATE TABLE` statement. Each row stores the decomposed
//! fields alongside the canonical binary encoding of the whole message.

pub mod convert;
pub mod ddl;
pub mod error;
pub mod protocol;
pub mod util;

pub use convert::{decode_row, RowMessage, PROTO_BINARY_COLUMN};
pub use error::ConvertError;
