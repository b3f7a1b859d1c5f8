//! Client for the storefront catalog API.
//!
//! Transport failures never escape as panics or missing collections: the
//! [`ProductsService`] boundary turns them into a safe default plus an explicit
//! error, and listing responses carry a [`RequestId`] so callers can drop
//! stale ones.

pub mod api;
pub mod error;
pub mod service;
pub mod state;
pub mod tracker;

pub use api::{CatalogApi, HttpCatalogClient};
pub use error::ClientError;
pub use service::ProductsService;
pub use state::{Fetched, LoadState};
pub use tracker::{RequestId, RequestTracker, Tracked};
