//! Grouping of flat catalog rows into per-product aggregates.

use indexmap::IndexMap;

use super::row::{CatalogRow, ProductId, RowSchema};

/// All rows sharing one product id, folded together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAggregate {
    pub product_id: ProductId,
    /// Last `sku` seen for this product.
    pub sku: String,
    /// Image URLs in input row order. Duplicates are kept.
    pub images: Vec<String>,
    /// Last `handle` seen for this product (five-column layout only).
    pub handle: Option<String>,
}

impl ProductAggregate {
    fn new(product_id: ProductId) -> Self {
        Self { product_id, sku: String::new(), images: Vec::new(), handle: None }
    }

    fn absorb(&mut self, row: CatalogRow) {
        if !self.images.is_empty() && self.sku != row.sku {
            tracing::warn!(
                product_id = %self.product_id,
                previous = %self.sku,
                current = %row.sku,
                "rows of one product disagree on sku; keeping the last value"
            );
        }
        self.sku = row.sku;
        self.images.push(row.image_url);
        if row.schema == RowSchema::WithHandle {
            self.handle = row.handle;
        }
    }
}

/// Product aggregates keyed by product id, iterated in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductGroups {
    groups: IndexMap<ProductId, ProductAggregate>,
}

impl ProductGroups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&ProductAggregate> {
        self.groups.get(product_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductAggregate> {
        self.groups.values()
    }

    pub fn product_ids(&self) -> impl Iterator<Item = &ProductId> {
        self.groups.keys()
    }
}

impl IntoIterator for ProductGroups {
    type Item = ProductAggregate;
    type IntoIter = indexmap::map::IntoValues<ProductId, ProductAggregate>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_values()
    }
}

/// Fold rows into one aggregate per product id.
///
/// The sku and handle of an aggregate are overwritten by every row of that
/// product, so the last row wins when they differ.
pub fn group_rows<I>(rows: I) -> ProductGroups
where
    I: IntoIterator<Item = CatalogRow>,
{
    let mut groups: IndexMap<ProductId, ProductAggregate> = IndexMap::new();

    for row in rows {
        groups
            .entry(row.product_id.clone())
            .or_insert_with(|| ProductAggregate::new(row.product_id.clone()))
            .absorb(row);
    }

    ProductGroups { groups }
}
