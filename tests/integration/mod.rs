//! Integration Tests Module
//!
//! End-to-end tests that run requests through the engine, report formatting
//! and CLI argument handling together.

pub mod cli_parsing;
