//! Typed catalog rows validated at the fetch boundary.

use std::fmt;

use crate::domain::AppError;

/// Product identifier as rendered by the database.
///
/// Numeric and textual keys are both carried as their textual form so that
/// `1` and `"1"` group together regardless of the column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self::new(value.to_string())
    }
}

/// One row as returned by a row source: cells in column order, `None` for NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow(pub Vec<Option<String>>);

impl RawRow {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for RawRow {
    fn from_iter<T: IntoIterator<Item = Option<S>>>(iter: T) -> Self {
        RawRow(iter.into_iter().map(|cell| cell.map(Into::into)).collect())
    }
}

/// Supported column layouts of the operator's query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSchema {
    /// `product_id, sku, type, image_url`
    Basic,
    /// `product_id, sku, type, image_url, handle`
    WithHandle,
}

impl RowSchema {
    /// Resolve the layout from a row's column count.
    pub fn from_arity(columns: usize) -> Option<Self> {
        match columns {
            4 => Some(RowSchema::Basic),
            5 => Some(RowSchema::WithHandle),
            _ => None,
        }
    }
}

/// A fetched row with a fixed field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub product_id: ProductId,
    pub sku: String,
    /// Value of the `type` column. Carried for completeness; grouping ignores it.
    pub kind: String,
    pub image_url: String,
    /// Display name. Always `None` for [`RowSchema::Basic`]; may be `None`
    /// for [`RowSchema::WithHandle`] when the column is NULL.
    pub handle: Option<String>,
    pub schema: RowSchema,
}

impl CatalogRow {
    /// Build a row from the four-column layout.
    pub fn basic(
        product_id: impl Into<ProductId>,
        sku: impl Into<String>,
        kind: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            sku: sku.into(),
            kind: kind.into(),
            image_url: image_url.into(),
            handle: None,
            schema: RowSchema::Basic,
        }
    }

    /// Build a row from the five-column layout.
    pub fn with_handle(
        product_id: impl Into<ProductId>,
        sku: impl Into<String>,
        kind: impl Into<String>,
        image_url: impl Into<String>,
        handle: Option<&str>,
    ) -> Self {
        Self {
            handle: handle.map(str::to_string),
            schema: RowSchema::WithHandle,
            ..Self::basic(product_id, sku, kind, image_url)
        }
    }

    /// Validate a raw row. `index` is the zero-based position in the result set
    /// and only used for error reporting.
    ///
    /// `product_id` and `image_url` must be non-NULL; a NULL `sku` or `type`
    /// becomes an empty string.
    pub fn from_raw(index: usize, raw: RawRow) -> Result<Self, AppError> {
        let schema = RowSchema::from_arity(raw.len())
            .ok_or(AppError::RowArity { index, actual: raw.len() })?;

        let mut cells = raw.0.into_iter();
        let mut next = || cells.next().flatten();

        let product_id =
            next().ok_or(AppError::NullColumn { index, column: "product_id" })?;
        let sku = next().unwrap_or_default();
        let kind = next().unwrap_or_default();
        let image_url = next().ok_or(AppError::NullColumn { index, column: "image_url" })?;
        let handle = match schema {
            RowSchema::Basic => None,
            RowSchema::WithHandle => next(),
        };

        Ok(Self { product_id: ProductId::new(product_id), sku, kind, image_url, handle, schema })
    }
}

/// Validate every raw row, failing on the first malformed one.
///
/// Nothing is returned for a result set that contains any malformed row, so
/// callers never aggregate a partial set.
pub fn validate_rows(rows: Vec<RawRow>) -> Result<Vec<CatalogRow>, AppError> {
    rows.into_iter().enumerate().map(|(index, raw)| CatalogRow::from_raw(index, raw)).collect()
}
