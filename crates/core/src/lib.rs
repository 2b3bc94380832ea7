//! `gildedrose-core` — shared domain building blocks.
//!
//! Only the error model lives here; the inventory rules themselves are in
//! `gildedrose-inventory`.

pub mod error;

pub use error::{DomainError, DomainResult};
