//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Reader tests (single file, variables, blocks, diagnostics)
//! - Source inclusion tests (shared state, cycles, relative paths)
//! - Type tests (keywords, serialisation, category merging)

#[cfg(test)]
mod source_tests;
