//! Shared test fixtures for TrainForge crates.
//!
//! This crate provides data and pure functions for testing.
//! It does NOT depend on `trainforge-solver` so the solver can use it as a
//! dev-dependency without two copies of its own types in one test build.
//!
//! - [`oracle`] - brute-force reference search over ordered sequences
//! - [`fixtures`] - goal predicates, pool transforms and sample statuses
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! trainforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use trainforge_test::oracle::brute_force_min_length;
//! use trainforge_test::fixtures::intellect_at_least_27;
//! ```

pub mod fixtures;
pub mod oracle;

pub use oracle::{brute_force_first_minimal, brute_force_min_length};
