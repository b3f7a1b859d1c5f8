use std::sync::Arc;

use chrono::{DateTime, Utc};

use storefront_catalog::{Catalog, PaginatedResponse, PriceRange, Product};
use storefront_core::{DomainError, DomainResult};

use crate::app::dto::ProductQuery;

/// Services shared by every handler.
///
/// The catalog is an immutable snapshot, so concurrent requests read it
/// without any locking.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
}

impl AppServices {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn products_list(&self, query: &ProductQuery) -> DomainResult<PaginatedResponse<Product>> {
        let page = self
            .catalog
            .query(Some(&query.filter), query.sort, query.page)?;
        tracing::debug!(
            total = page.total,
            page = page.page,
            page_size = page.page_size,
            returned = page.items.len(),
            "products listed"
        );
        Ok(page)
    }

    pub fn products_get(&self, id: &str) -> DomainResult<Product> {
        self.catalog.find_by_id(id).cloned().ok_or_else(|| {
            tracing::debug!(product_id = id, "product not found");
            DomainError::not_found()
        })
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog.list_categories()
    }

    pub fn price_range(&self) -> DomainResult<PriceRange> {
        self.catalog.price_range()
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog.len()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.catalog.loaded_at()
    }
}
