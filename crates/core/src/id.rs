//! Strongly-typed identifiers used across the domain.

use core::cmp::Ordering;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product (e.g. `prod-17`).
///
/// Ordering is natural rather than lexical: the non-numeric prefix compares
/// as text and a trailing run of digits compares as a number, so `prod-2`
/// sorts before `prod-10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Build an identifier, rejecting empty/blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: must not be empty"));
        }
        Ok(Self(value))
    }

    /// Identifier for the `n`-th generated product (`prod-n`).
    pub fn sequential(n: usize) -> Self {
        Self(format!("prod-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn split_numeric_suffix(&self) -> (&str, Option<u64>) {
        let digits = self
            .0
            .bytes()
            .rev()
            .take_while(|b| b.is_ascii_digit())
            .count();
        let (prefix, suffix) = self.0.split_at(self.0.len() - digits);
        (prefix, suffix.parse().ok())
    }
}

impl Ord for ProductId {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lp, ln) = self.split_numeric_suffix();
        let (rp, rn) = other.split_numeric_suffix();
        lp.cmp(rp)
            .then_with(|| ln.cmp(&rn))
            // Distinguishes `prod-01` from `prod-1`.
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ProductId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
