//! Statement-kind-specific SQL generators.
//!
//! The host's selection registry matches a statement against every
//! registered generator via `supports` and dispatches to the one with the
//! highest priority. The registry itself lives with the host; this crate
//! only exposes the predicate, the rank, and the generation entry point.

mod insert_or_update;
mod insert_set;
mod remarks;
mod set_nullable;

pub use insert_or_update::InsertOrUpdateGenerator;
pub use insert_set::InsertSetGenerator;
pub use remarks::{SetColumnRemarksGenerator, SetTableRemarksGenerator};
pub use set_nullable::SetNullableGenerator;

use crate::dialect::Dialect;
use crate::error::GenerateSqlError;
use crate::sql::Sql;
use crate::validation::ValidationErrors;

/// Rank of the generic, dialect-agnostic generator implementations.
pub const PRIORITY_DEFAULT: i32 = 1;

/// Rank for dialect-mandatory rewrites of mechanisms the base dialect has
/// no standard support for.
pub const PRIORITY_DATABASE: i32 = 5;

/// Margin this dialect's upsert and batch-insert generators claim over the
/// generic implementations, so the registry prefers them whenever the
/// dialect matches.
pub const DIALECT_PRIORITY_OFFSET: i32 = 5;

/// A SQL generator for one statement kind on one dialect.
pub trait SqlGenerator {
    type Statement;

    /// Whether this generator claims `statement` on `dialect`.
    fn supports(&self, statement: &Self::Statement, dialect: &dyn Dialect) -> bool;

    /// Rank consumed by the selection registry; higher wins among
    /// generators that claim the same statement.
    fn priority(&self) -> i32;

    /// Structural and capability checks, reported as data so multiple
    /// problems surface together.
    fn validate(&self, statement: &Self::Statement, dialect: &dyn Dialect) -> ValidationErrors;

    /// Produces ready-to-execute statements, never partial fragments.
    fn generate(
        &self,
        statement: &Self::Statement,
        dialect: &dyn Dialect,
    ) -> Result<Vec<Sql>, GenerateSqlError>;
}
