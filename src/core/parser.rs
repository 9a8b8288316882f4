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

//! src/core/parser.rs
//!
//! Hyprland configuration reader
//!
//! This module turns a config file (and everything it sources) into a
//! `ConfigModel`. It handles:
//! - All bind flag combinations (bind, binde, bindlr, bindd, ...)
//! - Variable definition and substitution ($mainMod)
//! - Nested `name { ... }` settings blocks
//! - `exec` / `exec-once` autostart directives
//! - `source = path` inclusion, depth-first and in place
//! - Comments and whitespace
//!
//! # Architecture
//! Single linear pass. Each line goes through:
//! 1. `normalizer`: strip comments, keep the trailing comment text
//! 2. `variables`: substitute `$name` with values defined *so far*
//! 3. `classifier`: decide the statement kind
//! 4. Route to the model, the block tracker or the source resolver
//!
//! Included files share the same `ConfigReader`, so variables and open
//! blocks carry across file boundaries in inclusion order.
//!
//! # Errors
//! Unreadable files and inclusion cycles abort the read. Malformed
//! statements and unbalanced braces are collected as diagnostics and the
//! read continues. Unrecognised top-level statements (`monitor = ...`,
//! `windowrule = ...`) are skipped and only logged at debug level.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::blocks::{BlockTracker, CloseOutcome};
use crate::core::classifier::{classify, split_assignment, Statement};
use crate::core::diagnostics::{Diagnostic, SourceLocation};
use crate::core::normalizer::normalize_line;
use crate::core::source::SourceResolver;
use crate::core::types::{AutoStartEntry, ConfigModel, Keybind, Keyword};
use crate::core::variables::VariableTable;

/// Fatal read errors; no model is produced
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Source cycle: {} is already being read", .path.display())]
    Cycle {
        path: PathBuf,
        /// Files open at the time, root first
        chain: Vec<PathBuf>,
    },

    #[error("Sources nested deeper than {limit} files at {}", .path.display())]
    IncludeTooDeep { path: PathBuf, limit: usize },
}

/// A finished read: the model plus any recoverable problems
#[derive(Clone, Debug, Default)]
pub struct ParseReport {
    pub config: ConfigModel,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parser context threaded through every included file
///
/// # Example
/// ```no_run
/// use hyprkeys::core::parser::ConfigReader;
/// use std::path::Path;
///
/// let report = ConfigReader::new().read(Path::new("/home/user/.config/hypr/hyprland.conf"))?;
/// println!("Found {} binds", report.config.binds.len());
/// # Ok::<(), hyprkeys::core::parser::ParseError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConfigReader {
    variables: VariableTable,
    blocks: BlockTracker,
    sources: SourceResolver,
    model: ConfigModel,
    diagnostics: Vec<Diagnostic>,
}

impl ConfigReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the maximum `source` nesting depth.
    pub fn with_max_include_depth(mut self, max_depth: usize) -> Self {
        self.sources = SourceResolver::with_max_depth(max_depth);
        self
    }

    /// Reads the root config file at `path` and everything it sources.
    pub fn read(mut self, path: &Path) -> Result<ParseReport, ParseError> {
        self.read_file(path)?;
        Ok(self.finish())
    }

    /// Parses in-memory `content` as if it were the file `origin`.
    ///
    /// `origin` anchors relative `source` paths and diagnostics; it does
    /// not have to exist.
    pub fn read_str(mut self, content: &str, origin: &Path) -> Result<ParseReport, ParseError> {
        self.process(content, origin)?;
        Ok(self.finish())
    }

    fn read_file(&mut self, path: &Path) -> Result<(), ParseError> {
        let canonical = self.sources.enter(path)?;
        debug!(file = %canonical.display(), depth = self.sources.depth(), "reading config");

        let result = SourceResolver::read(&canonical).and_then(|content| self.process(&content, &canonical));
        self.sources.leave();
        result
    }

    fn process(&mut self, content: &str, file: &Path) -> Result<(), ParseError> {
        for (idx, raw) in content.lines().enumerate() {
            let normalized = normalize_line(raw);
            if normalized.is_empty() {
                continue;
            }

            let location = SourceLocation::new(file, idx + 1);
            let semantic = self.substitute(&normalized.semantic);

            match classify(&semantic, !self.blocks.is_empty()) {
                Ok(statement) => self.apply(statement, normalized.comment, location)?,
                Err(malformed) => self.report(Diagnostic::malformed(location, malformed.message)),
            }
        }

        Ok(())
    }

    /// Substitutes known variables. For a declaration only the value side
    /// is substituted so re-declaring `$x` never rewrites its own name.
    fn substitute(&self, line: &str) -> String {
        if line.starts_with('$') {
            return match split_assignment(line) {
                Some((name, value)) => format!("{} = {}", name, self.variables.substitute(value)),
                None => line.to_string(),
            };
        }

        self.variables.substitute(line)
    }

    fn apply(
        &mut self,
        statement: Statement,
        comment: String,
        location: SourceLocation,
    ) -> Result<(), ParseError> {
        match statement {
            Statement::Variable { name, value } => {
                self.variables.define(name.clone(), value.clone());
                self.model.keywords.push(Keyword { name, value });
            }
            Statement::BlockOpen { name } => self.blocks.open(&name, location),
            Statement::BlockClose => match self.blocks.close() {
                CloseOutcome::Completed(category) => self.model.push_category(category),
                CloseOutcome::Nested => {}
                CloseOutcome::Unbalanced => {
                    self.report(Diagnostic::unbalanced(location, "`}` without a matching block"))
                }
            },
            Statement::Bind {
                bind_type,
                bind,
                description,
                dispatcher,
                command,
            } => self.model.binds.push(Keybind {
                bind_type,
                bind,
                description,
                dispatcher,
                command,
                comments: comment,
            }),
            Statement::Exec { exec_type, command } => {
                self.model.auto_start.push(AutoStartEntry { exec_type, command })
            }
            Statement::Source { path } => {
                let target = SourceResolver::resolve(&path, &location.file);
                debug!(source = %target.display(), from = %location, "following source");
                self.read_file(&target)?;
            }
            Statement::Setting { key, value } => {
                self.blocks.set(&key, &value);
            }
            Statement::Unrecognized => {
                debug!(location = %location, "skipping unrecognised statement");
            }
        }

        Ok(())
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn finish(mut self) -> ParseReport {
        let (completed, unclosed) = self.blocks.finish();
        for opened_at in unclosed {
            self.report(Diagnostic::unbalanced(opened_at, "block is never closed"));
        }
        if let Some(category) = completed {
            self.model.push_category(category);
        }

        ParseReport {
            config: self.model,
            diagnostics: self.diagnostics,
        }
    }
}

/// Reads a Hyprland config file and everything it sources.
///
/// # Example
/// ```no_run
/// use hyprkeys::core::parser::read_config;
/// use std::path::Path;
///
/// let report = read_config(Path::new("/tmp/hyprland.conf"))?;
/// for bind in &report.config.binds {
///     println!("{}", bind);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn read_config(path: &Path) -> Result<ParseReport, ParseError> {
    ConfigReader::new().read(path)
}

/// Parses config text that has no file behind it.
///
/// Relative `source` paths resolve against the working directory.
pub fn parse_config_str(content: &str) -> Result<ParseReport, ParseError> {
    ConfigReader::new().read_str(content, Path::new("hyprland.conf"))
}
