use log::debug;
use prost::Message;

use super::{RowMessage, PROTO_BINARY_COLUMN};
use crate::error::Result;
use crate::protocol::SearchRequest;
use crate::util::dbtype::{Column, Value};
use crate::util::row::{Row, Schema};

/// (query, page_number, result_per_page, PROTO_BINARY)
pub type SearchRequestTuple = (String, i32, i32, Vec<u8>);

impl RowMessage for SearchRequest {
    type Tuple = SearchRequestTuple;

    const TABLE: &'static str = "SearchRequest";
    const COLUMNS: &'static [&'static str] =
        &["query", "page_number", "result_per_page", PROTO_BINARY_COLUMN];

    fn schema() -> Schema {
        vec![
            ("query".to_string(), Column::Text),
            ("page_number".to_string(), Column::Int),
            ("result_per_page".to_string(), Column::Int),
        ]
    }

    fn to_tuple(&self) -> Result<SearchRequestTuple> {
        debug!("converting SearchRequest, query of {} bytes", self.query.len());
        Ok((
            self.query.clone(),
            self.page_number,
            self.result_per_page,
            self.encode_to_vec(),
        ))
    }

    fn to_row(&self) -> Result<Row> {
        let (query, page_number, result_per_page, binary) = self.to_tuple()?;
        Ok(vec![
            Value::from(query),
            Value::from(page_number),
            Value::from(result_per_page),
            Value::from(binary),
        ])
    }
}

pub fn search_request_column_names() -> String {
    SearchRequest::column_names()
}

pub fn search_request_to_tuple(value: &SearchRequest) -> Result<SearchRequestTuple> {
    value.to_tuple()
}
