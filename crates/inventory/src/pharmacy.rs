use serde::{Deserialize, Serialize};

use crate::drug::Drug;
use crate::policy::select_policy;

/// Ordered drug stock.
///
/// Insertion order is the update order and the order handed back to callers.
/// Positions are the only identity; duplicate names age independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pharmacy {
    drugs: Vec<Drug>,
}

impl Pharmacy {
    pub fn new(drugs: Vec<Drug>) -> Self {
        Self { drugs }
    }

    pub fn drugs(&self) -> &[Drug] {
        &self.drugs
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }

    pub fn push(&mut self, drug: Drug) {
        self.drugs.push(drug);
    }

    pub fn into_drugs(self) -> Vec<Drug> {
        self.drugs
    }

    /// Age every drug by one day, in order, and return the updated stock.
    pub fn advance_one_day(&mut self) -> &[Drug] {
        let span = tracing::debug_span!("advance_one_day", drugs = self.drugs.len());
        let _guard = span.enter();

        for drug in &mut self.drugs {
            let policy = select_policy(drug);
            let (expires_before, benefit_before) = (drug.expires_in, drug.benefit);

            policy.apply(drug);

            tracing::trace!(
                name = drug.name(),
                policy = policy.label(),
                expires_before,
                expires_after = drug.expires_in,
                benefit_before,
                benefit_after = drug.benefit,
                "drug aged"
            );
            if expires_before >= 0 && drug.is_expired() {
                tracing::debug!(name = drug.name(), benefit = drug.benefit, "drug expired");
            }
        }

        &self.drugs
    }

    /// Run `days` consecutive day passes. Zero days leaves the stock untouched.
    pub fn advance_days(&mut self, days: u32) -> &[Drug] {
        for _ in 0..days {
            self.advance_one_day();
        }
        &self.drugs
    }
}

impl From<Vec<Drug>> for Pharmacy {
    fn from(drugs: Vec<Drug>) -> Self {
        Self::new(drugs)
    }
}

impl FromIterator<Drug> for Pharmacy {
    fn from_iter<I: IntoIterator<Item = Drug>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
