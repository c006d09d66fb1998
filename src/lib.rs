//! Utility and credential handling helpers for the Prentice toolkit.
//! The crate is deliberately small and transparent: every helper is a direct,
//! single-pass computation, and credential handling stays readable in-repo.

pub mod arithmetic;
pub mod credential;
pub mod environment;
pub mod greeting;
pub mod metrics;
pub mod sequence;
pub mod summary;
