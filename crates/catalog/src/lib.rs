//! Product catalog domain module.
//!
//! This crate holds the Catalog Query Service: filtering, ordering and paging
//! over an immutable product snapshot, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod filter;
pub mod mock;
pub mod pagination;
pub mod product;
pub mod wire;

pub use catalog::{Catalog, PriceRange};
pub use filter::{ProductFilter, ProductSort};
pub use pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PaginatedResponse};
pub use product::{CATEGORIES, Price, Product, Rating, StarBreakdown};
pub use storefront_core::ProductId;
pub use wire::{ApiResponse, PRODUCT_NOT_FOUND};
