//! Command-line front end for the `markup-guard` validator.
//!
//! The binary lives in `main.rs`; the pieces it wires together are exposed
//! here so they can be tested directly.

pub mod demo;
pub mod logging;
pub mod output;
pub mod report;
