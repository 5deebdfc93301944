//! Integration test crate for invhue.
//!
//! Holds cross-crate tests that drive the library through its public API
//! and through the command-line front end.

#[cfg(test)]
mod transform;
