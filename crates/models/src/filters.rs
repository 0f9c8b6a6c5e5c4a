//! Reusable filter expressions.

use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::ColumnTrait;

/// `lower(column) = lower(value)`; the same expression the unique indexes
/// are built on, so lookups and constraints agree on what a duplicate is.
///
/// Both sides are folded by the database, so non-ASCII names follow the
/// database's `lower()` (its locale) rather than Rust's Unicode mapping.
pub fn eq_ignore_case<C: ColumnTrait>(column: C, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).eq(Func::lower(Expr::val(value)))
}
