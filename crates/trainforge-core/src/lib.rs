//! TrainForge Core - Core types for training-plan solving
//!
//! This crate provides the value types shared by every TrainForge crate:
//! - [`Attribute`] the four trainable quantities
//! - [`TrainingScore`] the closed set of per-operation magnitudes
//! - [`Operation`] one atomic training action and the canonical pools
//! - [`Status`] the four-attribute snapshot operations are applied to
//! - [`TrainforgeError`] the workspace-wide error type

pub mod attribute;
pub mod error;
pub mod operation;
pub mod score;
pub mod status;

#[cfg(test)]
mod tests;

pub use attribute::Attribute;
pub use error::{Result, TrainforgeError};
pub use operation::{
    checklist, sorted_for_display, Operation, ALL_OPERATIONS, ALL_OPERATIONS_EXCEPT_HIGH_FOCUS,
};
pub use score::TrainingScore;
pub use status::{apply_operations, RawStatus, Status};
