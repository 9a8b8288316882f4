//! Config module tests
//!
//! - Options defaults and path expansion
//! - Atomic output writing
