use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_catalog::{PageRequest, Price, ProductFilter, ProductSort};
use storefront_core::{DomainError, DomainResult};

// -------------------------
// Request DTOs
// -------------------------

/// Raw `GET /api/products` query string.
///
/// Every value stays a string until [`ListProductsParams::parse`] validates
/// it, so a malformed number is reported rather than silently coerced.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub in_stock: Option<String>,
    pub search_term: Option<String>,
    pub sort: Option<String>,
}

/// Validated listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub sort: ProductSort,
    pub page: PageRequest,
}

impl ListProductsParams {
    pub fn parse(self) -> DomainResult<ProductQuery> {
        let defaults = PageRequest::default();
        let page = PageRequest {
            page: parse_field("page", self.page.as_deref(), parse_positive)?
                .unwrap_or(defaults.page),
            page_size: parse_field("pageSize", self.page_size.as_deref(), parse_positive)?
                .unwrap_or(defaults.page_size),
        };
        page.validate()?;

        let filter = ProductFilter {
            category: non_blank(self.category),
            min_price: parse_field("minPrice", self.min_price.as_deref(), Price::from_str)?,
            max_price: parse_field("maxPrice", self.max_price.as_deref(), Price::from_str)?,
            in_stock: parse_field("inStock", self.in_stock.as_deref(), parse_strict_bool)?,
            search_term: non_blank(self.search_term),
        };
        filter.validate()?;

        let sort = parse_field("sort", self.sort.as_deref(), ProductSort::from_str)?.unwrap_or_default();

        Ok(ProductQuery { filter, sort, page })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse an optional raw value, prefixing failures with the parameter name.
fn parse_field<T>(
    name: &str,
    raw: Option<&str>,
    parse: impl FnOnce(&str) -> DomainResult<T>,
) -> DomainResult<Option<T>> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => parse(v).map(Some).map_err(|e| match e {
            DomainError::Validation(msg) => DomainError::validation(format!("{name}: {msg}")),
            other => other,
        }),
    }
}

fn parse_positive(raw: &str) -> DomainResult<u32> {
    let n: u32 = raw
        .parse()
        .map_err(|_| DomainError::validation(format!("'{raw}' is not a positive integer")))?;
    if n == 0 {
        return Err(DomainError::validation("must be at least 1"));
    }
    Ok(n)
}

fn parse_strict_bool(raw: &str) -> DomainResult<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DomainError::validation(format!("'{raw}' is not 'true' or 'false'"))),
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub products: usize,
    pub loaded_at: String,
}
