//! Domain types shared across the auction catalog crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; `infra/` converts to and from them.

pub mod id;
pub mod money;
pub mod validation;
