//! Shared test utilities for Rowpush integration tests.
//!
//! `TestEnv` gives every test an isolated project directory and home
//! directory, and runs the `rowpush` binary inside them.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
