use crate::dao::database::{Database, Table};
use crate::types::links::JsonMap;
use serde::Serialize;
use std::convert::TryFrom;

pub trait StructFieldNames {
    fn field_names() -> &'static [&'static str];
}

/// A row type of one in-memory table.
pub trait Model:
Serialize
+ Clone
+ Default
+ StructFieldNames
+ TryFrom<JsonMap, Error = String>
+ Into<JsonMap>
+ Send
+ Sync
+ 'static
{
    fn table_name() -> &'static str;
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn table(db: &Database) -> &Table<Self>;
    fn table_mut(db: &mut Database) -> &mut Table<Self>;
}
