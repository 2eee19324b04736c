//! Unit tests for the shared data model.

/// Address newtype derivations and successor arithmetic.
pub mod addr;
