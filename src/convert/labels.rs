use log::warn;

use crate::error::{ConvertError, Result};

/// A fixed mapping from an enumeration's wire codes to its declared names.
#[derive(Debug, PartialEq, Eq)]
pub struct LabelTable {
    pub enum_name: &'static str,
    entries: &'static [(i32, &'static str)],
}

impl LabelTable {
    pub const fn new(enum_name: &'static str, entries: &'static [(i32, &'static str)]) -> Self {
        LabelTable { enum_name, entries }
    }

    /// Looks up the label for `code`. A code missing from the table is an error,
    /// never a fallback to some default label.
    pub fn label(&self, code: i32) -> Result<&'static str> {
        match self.entries.iter().find(|(c, _)| *c == code) {
            Some((_, label)) => Ok(*label),
            None => {
                warn!("no label for code {} in {}", code, self.enum_name);
                Err(ConvertError::UnknownEnumCode {
                    enum_name: self.enum_name,
                    code,
                })
            }
        }
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(_, label)| *label)
    }
}

pub static GENDER: LabelTable = LabelTable::new(
    "Foo.User.Gender",
    &[(0, "MALE"), (1, "FEMALE"), (2, "OTHER")],
);
