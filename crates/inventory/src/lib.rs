//! Pharmacy inventory domain module.
//!
//! This crate contains the daily aging rules for drug stock, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod drug;
pub mod pharmacy;
pub mod policy;

pub use drug::{Drug, MAX_BENEFIT, MIN_BENEFIT};
pub use pharmacy::Pharmacy;
pub use policy::{
    AgingPolicy, DAFALGAN, FERVEX, FERVEX_NEAR_DAYS, FERVEX_URGENT_DAYS, HERBAL_TEA, MAGIC_PILL,
    select_policy,
};
