use log::debug;
use prost::Message;

use super::json::message_to_json;
use super::labels::GENDER;
use super::{RowMessage, PROTO_BINARY_COLUMN};
use crate::error::Result;
use crate::protocol::User;
use crate::util::dbtype::{Column, Value};
use crate::util::row::{Row, Schema};

/// (id, username, Age, sgender, s, stamps, PROTO_BINARY)
pub type UserTuple = (i64, String, Option<i32>, &'static str, String, String, Vec<u8>);

impl RowMessage for User {
    type Tuple = UserTuple;

    const TABLE: &'static str = "User";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "username",
        "Age",
        "sgender",
        "s",
        "stamps",
        PROTO_BINARY_COLUMN,
    ];

    fn schema() -> Schema {
        vec![
            ("id".to_string(), Column::BigInt),
            ("username".to_string(), Column::Text),
            ("Age".to_string(), Column::Nullable(Box::new(Column::Int))),
            ("sgender".to_string(), Column::Enum(&GENDER)),
            ("s".to_string(), Column::Text),
            ("stamps".to_string(), Column::Json),
        ]
    }

    /// `Age` stays `None` unless the field was explicitly set, so a set zero
    /// is kept apart from an unset field. An `sgender` code outside the label
    /// table fails the whole conversion.
    fn to_tuple(&self) -> Result<UserTuple> {
        debug!("converting User id={}", self.id);
        let sgender = GENDER.label(self.sgender)?;
        let stamps = message_to_json(self.stamps.as_ref())?;
        Ok((
            self.id,
            self.username.clone(),
            self.age,
            sgender,
            self.s.clone(),
            stamps,
            self.encode_to_vec(),
        ))
    }

    fn to_row(&self) -> Result<Row> {
        let (id, username, age, sgender, s, stamps, binary) = self.to_tuple()?;
        Ok(vec![
            Value::from(id),
            Value::from(username),
            Value::from(age),
            Value::from(sgender),
            Value::from(s),
            Value::from(stamps),
            Value::from(binary),
        ])
    }
}

pub fn user_column_names() -> String {
    User::column_names()
}

pub fn user_to_tuple(value: &User) -> Result<UserTuple> {
    value.to_tuple()
}
