//! `storefront-core`: identifiers, errors and the entity/value-object traits
//! shared by the catalog and its HTTP surfaces. No IO lives here.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
