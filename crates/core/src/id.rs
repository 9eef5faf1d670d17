//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use crate::error::DomainError;

/// Identifier of a stored product.
///
/// Always positive. Assigned by the store, never by callers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(u64);

impl ProductId {
    /// Id given to the first product of an empty store.
    pub const fn first() -> Self {
        Self(1)
    }

    /// The id immediately after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Wrap a raw value; zero is not a valid product id.
    pub fn from_u64(value: u64) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::invalid_id("ProductId: must be positive"));
        }
        Ok(Self(value))
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    /// Accepts a base-10 integer with optional surrounding whitespace, so a
    /// path segment like `"3"` resolves to the stored id `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Self::from_u64(raw)
    }
}
