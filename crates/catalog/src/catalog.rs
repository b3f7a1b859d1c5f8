//! Catalog Query Service: read-only queries over an immutable product snapshot.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity};

use crate::filter::{ProductFilter, ProductSort};
use crate::mock;
use crate::pagination::{PageRequest, PaginatedResponse};
use crate::product::{Price, Product};

/// Cheapest and most expensive price in the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

/// Immutable snapshot of the product collection.
///
/// Products are put into natural id order once at construction; that order is
/// the baseline every listing is sorted from. Share it behind an `Arc`, since
/// nothing here takes `&mut self`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Freeze `products` into a snapshot.
    ///
    /// Duplicate ids are rejected, since `find_by_id` must be unambiguous.
    pub fn new(mut products: Vec<Product>) -> DomainResult<Self> {
        products.sort_by(|a, b| a.id().cmp(b.id()));
        if let Some(pair) = products.windows(2).find(|w| w[0].same_identity_as(&w[1])) {
            return Err(DomainError::validation(format!(
                "duplicate product id '{}'",
                pair[0].id
            )));
        }
        Ok(Self {
            products,
            loaded_at: Utc::now(),
        })
    }

    /// Snapshot of `count` generated demo products, reproducible for a given seed.
    pub fn mock(count: usize, seed: u64) -> Self {
        Self {
            products: mock::generate(count, seed),
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Filter, order and page the catalog.
    ///
    /// `total` counts every match before slicing. A page past the end returns
    /// no items rather than an error.
    pub fn query(
        &self,
        filter: Option<&ProductFilter>,
        sort: ProductSort,
        page: PageRequest,
    ) -> DomainResult<PaginatedResponse<Product>> {
        page.validate()?;

        let mut matches: Vec<&Product> = match filter {
            Some(filter) => {
                filter.validate()?;
                let matcher = filter.matcher();
                self.products.iter().filter(|&p| matcher(p)).collect()
            }
            None => self.products.iter().collect(),
        };

        // Snapshot is already in id order.
        if sort != ProductSort::Id {
            matches.sort_by(|a, b| sort.compare(a, b));
        }

        Ok(PaginatedResponse::from_slice(&matches, page).map(Product::clone))
    }

    /// Exact id lookup; a miss is an ordinary `None`.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Distinct categories, alphabetically.
    pub fn list_categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub fn price_range(&self) -> DomainResult<PriceRange> {
        let mut prices = self.products.iter().map(|p| p.price);
        let first = prices
            .next()
            .ok_or_else(|| DomainError::invalid_state("price range of an empty catalog"))?;
        let (min, max) = prices.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Ok(PriceRange { min, max })
    }
}
