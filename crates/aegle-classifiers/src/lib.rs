//! aegle-classifiers: tabular disease prediction from patient attributes.
//!
//! This crate provides the full training-and-inference pipeline used by the
//! `aegle` CLI: CSV loading, per-column label encoding, a cached train/test
//! split, cross-validated grid search over a random-forest classifier,
//! evaluation metrics, and free-text input normalization for single-record
//! prediction.
//!
//! The design favors small, testable modules; the fitted state (encoders and
//! the selected model) is bundled in an explicit [`pipeline::FittedPipeline`]
//! value rather than held globally.
pub mod config;
pub mod data;
pub mod encoding;
pub mod error;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod search;
pub mod split;
