//! # Compliance Calculators
//!
//! Pure per-facility arithmetic: SEC assessment against baseline and
//! target, and the certificate position that assessment implies. Batch
//! aggregation lives in [`crate::portfolio`].

pub mod escerts;
pub mod sec;

pub use escerts::*;
pub use sec::*;
