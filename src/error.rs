use thiserror::Error;

/// Faults raised while turning a message into an insertable row.
///
/// Nothing here is recovered locally; every variant reaches the caller as-is.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The wire code is not present in the enumeration's label table.
    #[error("unknown code {code} for enum {enum_name}")]
    UnknownEnumCode { enum_name: &'static str, code: i32 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
