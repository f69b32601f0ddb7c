//! Core business logic for tradepost.
//!
//! One service per resource, each wrapping the repositories it needs.
//! Services own input validation, id generation, timestamp stamping,
//! default application, and referential pre-checks; repositories own the
//! queries.

pub mod services;

pub use services::*;
