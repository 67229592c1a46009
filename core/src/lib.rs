//! Travel-time estimation.
//!
//! A pure, stateless calculation: every lookup table is a constant and no
//! result is cached, so [`estimate`] may be called from any number of
//! threads without coordination.

pub mod estimator;
pub mod peak;
pub mod tables;

pub use estimator::estimate;
pub use peak::peak_adjustment;
