//! Shared value types for the travel-time estimator.
//!
//! Everything in here is an immutable value: requests and estimates are built
//! fresh for every calculation and never mutated afterwards.

pub mod config;
pub mod error;
pub mod trip;
pub mod utils;

pub use error::TripError;
