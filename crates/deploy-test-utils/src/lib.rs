//! Shared test utilities for the deploy-settings workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`documents`] - realistic project, config and package manifest bodies
//! - [`probe`] - [`CountingProbe`](probe::CountingProbe) for asserting disk access
//! - [`solution`] - [`TestSolution`](solution::TestSolution) builder for on-disk layouts

pub mod documents;
pub mod probe;
pub mod solution;

pub use probe::CountingProbe;
pub use solution::TestSolution;
