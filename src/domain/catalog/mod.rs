//! Catalog rows and their grouping into products.

pub mod grouping;
pub mod row;

pub use grouping::{ProductAggregate, ProductGroups, group_rows};
pub use row::{CatalogRow, ProductId, RawRow, RowSchema, validate_rows};
