pub mod dbtype;
pub mod row;
