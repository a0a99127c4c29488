//! Immutable statement value objects. Each is constructed by the changelog
//! layer for a single generation call and discarded afterwards.

mod insert_or_update;
mod insert_set;
mod remarks;
mod set_nullable;

pub use insert_or_update::InsertOrUpdateStatement;
pub use insert_set::{InsertSetStatement, InsertStatement};
pub use remarks::{SetColumnRemarksStatement, SetTableRemarksStatement};
pub use set_nullable::SetNullableStatement;
