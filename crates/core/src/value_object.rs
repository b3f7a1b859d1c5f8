//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// - **Value Object**: `Price { cents: 1299 }`, two prices of 12.99 are equal
/// - **Entity**: `Product { id: "prod-1", .. }`, equal ids mean the same product
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price { cents: u64 }
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price { cents: 1299 }, Price { cents: 1299 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
