use serde::{Deserialize, Serialize};

use pharmacy_core::{DomainError, DomainResult};

/// Lowest benefit any drug may carry after a day pass.
pub const MIN_BENEFIT: i64 = 0;

/// Highest benefit any drug may carry after a day pass.
pub const MAX_BENEFIT: i64 = 50;

/// A single stock entry.
///
/// The name selects the aging rules and is read-only once constructed. The two
/// counters are public to the crate so policies can mutate them in place;
/// construction accepts any values (range checks are opt-in, see
/// [`Drug::validate`]).
///
/// Equality is structural. A drug has no identity beyond its position in a
/// [`Pharmacy`](crate::Pharmacy), so two equal entries are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    name: String,
    pub(crate) expires_in: i64,
    pub(crate) benefit: i64,
}

impl Drug {
    pub fn new(name: impl Into<String>, expires_in: i64, benefit: i64) -> Self {
        Self {
            name: name.into(),
            expires_in,
            benefit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days left before expiration. Negative once expired.
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }

    pub fn benefit(&self) -> i64 {
        self.benefit
    }

    pub fn is_expired(&self) -> bool {
        self.expires_in < 0
    }

    /// Strict input check for callers that want one.
    ///
    /// The aging pass never calls this.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !(MIN_BENEFIT..=MAX_BENEFIT).contains(&self.benefit) {
            return Err(DomainError::invariant(format!(
                "benefit {} outside {MIN_BENEFIT}..={MAX_BENEFIT}",
                self.benefit
            )));
        }
        Ok(())
    }
}
