//! # u-kit
//!
//! Generic collection, locale, and numeric helper primitives.
//!
//! This crate provides small, stateless building blocks that are
//! domain-agnostic: deduplication and grouping over any item type,
//! locale-aware value lookup with ordered fallback, and single-decision
//! rounding modes. It knows nothing about any consumer domain.
//!
//! ## Modules
//!
//! - [`collection`] — filtering, deduplication, grouping, priority lookup
//! - [`i18n`] — locale parsing and fallback-chain value resolution
//! - [`math`] — rounding modes, summation, min/max-by reducers
//! - [`object`] — JSON object shaping and content hashing
//! - [`strings`] — case-insensitive comparison
//!
//! ## Design Philosophy
//!
//! - **Pure functions only**: every operation is a side-effect-free
//!   transformation of its inputs; nothing is mutated, nothing is shared
//! - **Absence is `Option`**: missing values, missing map entries, and
//!   empty lookups all surface as `None`, never as panics
//! - **Property-based testing**: ordering and idempotence invariants
//!   verified via proptest

pub mod collection;
pub mod i18n;
pub mod math;
pub mod object;
pub mod strings;
