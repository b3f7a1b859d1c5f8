//! Product filter predicates and result ordering.

use core::cmp::Ordering;
use core::str::FromStr;

use storefront_core::{DomainError, DomainResult};

use crate::product::{Price, Product};

/// Optional predicates narrowing the catalog.
///
/// Every field is independent; `None` means "no constraint", never "match
/// empty". Empty `category`/`search_term` strings are also treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub in_stock: Option<bool>,
    pub search_term: Option<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_price(mut self, price: Price) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn with_max_price(mut self, price: Price) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// True when no predicate constrains the catalog.
    pub fn is_unconstrained(&self) -> bool {
        self.category().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.in_stock.is_none()
            && self.search_term().is_none()
    }

    /// Reject filters that can never match by construction.
    pub fn validate(&self) -> DomainResult<()> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(DomainError::validation(format!(
                    "minPrice ({min}) must not exceed maxPrice ({max})"
                )));
            }
        }
        Ok(())
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|t| !t.is_empty())
    }

    /// Compile the filter into a reusable predicate.
    ///
    /// Predicates apply conjunctively in a fixed order: category, minimum
    /// price, maximum price, stock, search term.
    pub fn matcher(&self) -> impl Fn(&Product) -> bool + '_ {
        let needle = self.search_term().map(str::to_lowercase);
        move |p: &Product| {
            self.category().is_none_or(|c| p.category == c)
                && self.min_price.is_none_or(|min| p.price >= min)
                && self.max_price.is_none_or(|max| p.price <= max)
                && self.in_stock.is_none_or(|s| p.in_stock == s)
                && needle.as_deref().is_none_or(|n| p.matches_search(n))
        }
    }
}

/// Explicit result ordering for listings.
///
/// Every ordering falls back to natural id order so pages never shuffle
/// between identical requests.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    Id,
    Name,
    PriceAsc,
    PriceDesc,
    /// Highest rated first.
    Rating,
}

impl ProductSort {
    pub const ALL: [ProductSort; 5] = [
        ProductSort::Id,
        ProductSort::Name,
        ProductSort::PriceAsc,
        ProductSort::PriceDesc,
        ProductSort::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSort::Id => "id",
            ProductSort::Name => "name",
            ProductSort::PriceAsc => "price_asc",
            ProductSort::PriceDesc => "price_desc",
            ProductSort::Rating => "rating",
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let primary = match self {
            ProductSort::Id => Ordering::Equal,
            ProductSort::Name => a.name.cmp(&b.name),
            ProductSort::PriceAsc => a.price.cmp(&b.price),
            ProductSort::PriceDesc => b.price.cmp(&a.price),
            ProductSort::Rating => b.rating.value().total_cmp(&a.rating.value()),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl FromStr for ProductSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductSort::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown sort '{s}' (expected one of: id, name, price_asc, price_desc, rating)"
                ))
            })
    }
}

impl core::fmt::Display for ProductSort {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
