//! Shared helpers for input validation and table fingerprinting.

pub mod validation;
