// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Core configuration reading module
//!
//! This module contains the data model and the line-oriented reader
//! pipeline, leaf-first:
//! - `normalizer`: comment and whitespace stripping
//! - `variables`: `$name` table and substitution
//! - `blocks`: `{ }` nesting tracker
//! - `classifier`: statement recognition
//! - `source`: `source = path` resolution with cycle protection
//! - `parser`: the reader that ties them together
//!
//! Nothing here renders output or writes files, so every stage can be
//! unit tested in isolation.

pub mod blocks;
pub mod classifier;
pub mod diagnostics;
pub mod filter;
pub mod normalizer;
pub mod parser;
pub mod source;
pub mod types;
pub mod variables;

pub use diagnostics::{Diagnostic, DiagnosticKind, SourceLocation};
pub use filter::filter_binds;
pub use parser::{read_config, ConfigReader, ParseError, ParseReport};
pub use types::*;

#[cfg(test)]
mod tests;
