use storefront_catalog::{
    PageRequest, PaginatedResponse, Price, PriceRange, Product, ProductFilter, ProductSort,
};

use crate::api::CatalogApi;
use crate::state::Fetched;
use crate::tracker::{RequestTracker, Tracked};

/// Price range reported when the real one cannot be fetched.
pub const FALLBACK_PRICE_RANGE: PriceRange = PriceRange {
    min: Price::ZERO,
    max: Price::from_cents(100_000),
};

/// Catalog access for UI code.
///
/// Every call succeeds with usable data: on failure the result holds a safe
/// default and the error that caused it. Listing and detail calls are tagged
/// so a response overtaken by a newer request can be recognised and dropped.
pub struct ProductsService<A> {
    api: A,
    listings: RequestTracker,
    details: RequestTracker,
}

impl<A: CatalogApi> ProductsService<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            listings: RequestTracker::new(),
            details: RequestTracker::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn listings(&self) -> &RequestTracker {
        &self.listings
    }

    pub fn details(&self) -> &RequestTracker {
        &self.details
    }

    pub async fn products(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        page: PageRequest,
    ) -> Tracked<Fetched<PaginatedResponse<Product>>> {
        let request = self.listings.begin();
        let value = match self.api.products(filter, sort, page).await {
            Ok(listing) => Fetched::ok(listing),
            Err(err) => {
                tracing::error!(error = %err, request = request.get(), "failed to fetch products");
                Fetched::fallback(PaginatedResponse::default(), err)
            }
        };
        Tracked { request, value }
    }

    pub async fn product(&self, id: &str) -> Tracked<Fetched<Option<Product>>> {
        let request = self.details.begin();
        let value = match self.api.product(id).await {
            Ok(found) => Fetched::ok(found),
            Err(err) => {
                tracing::error!(error = %err, product_id = id, "failed to fetch product");
                Fetched::fallback(None, err)
            }
        };
        Tracked { request, value }
    }

    pub async fn categories(&self) -> Fetched<Vec<String>> {
        match self.api.categories().await {
            Ok(categories) => Fetched::ok(categories),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch categories");
                Fetched::fallback(Vec::new(), err)
            }
        }
    }

    pub async fn price_range(&self) -> Fetched<PriceRange> {
        match self.api.price_range().await {
            Ok(range) => Fetched::ok(range),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch price range");
                Fetched::fallback(FALLBACK_PRICE_RANGE, err)
            }
        }
    }
}
