// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Recoverable parse problems
//!
//! Diagnostics never abort a read. The offending line is skipped (or the
//! open block implicitly closed) and the issue is collected here so the
//! caller can show it next to the best-effort model.

use std::fmt;
use std::path::{Path, PathBuf};

/// A line in a specific config file (1-based)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: &Path, line: usize) -> Self {
        Self {
            file: file.to_path_buf(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// Category of a recoverable problem
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiagnosticKind {
    /// A keyword was recognised but the statement has the wrong shape
    MalformedStatement,
    /// A `}` without an opener, or a block still open at end of input
    UnbalancedBlock,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MalformedStatement => write!(f, "malformed statement"),
            DiagnosticKind::UnbalancedBlock => write!(f, "unbalanced block"),
        }
    }
}

/// A single recoverable issue found while reading
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: SourceLocation,
    /// Human-readable description
    pub message: String,
}

impl Diagnostic {
    pub fn malformed(location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::MalformedStatement,
            location,
            message: message.into(),
        }
    }

    pub fn unbalanced(location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::UnbalancedBlock,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.kind, self.message)
    }
}
