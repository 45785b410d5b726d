//! Procedures of a refutation.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod refute;
pub mod resolve;
