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

//! src/core/source.rs
//!
//! Path resolution and cycle protection for `source = path` directives
//!
//! Relative paths resolve against the directory of the including file,
//! never the process working directory. `~` is expanded. The resolver
//! keeps the chain of files currently being read; entering a file that
//! is already on the chain is a cycle.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::parser::ParseError;

/// Maximum number of nested `source` levels, root file included
pub const MAX_INCLUDE_DEPTH: usize = 32;

/// Tracks the current inclusion chain
#[derive(Debug)]
pub struct SourceResolver {
    /// Canonical paths of the files currently open, root first
    chain: Vec<PathBuf>,
    max_depth: usize,
}

impl SourceResolver {
    pub fn new() -> Self {
        Self::with_max_depth(MAX_INCLUDE_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            chain: Vec::new(),
            max_depth,
        }
    }

    /// Current inclusion depth (0 when nothing is being read).
    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    /// Turns a `source` argument into a path.
    ///
    /// # Example
    /// ```
    /// use hyprkeys::core::source::SourceResolver;
    /// use std::path::{Path, PathBuf};
    ///
    /// let resolved = SourceResolver::resolve("./extra.conf", Path::new("/etc/hypr/hyprland.conf"));
    /// assert_eq!(resolved, PathBuf::from("/etc/hypr/./extra.conf"));
    /// ```
    pub fn resolve(raw: &str, including_file: &Path) -> PathBuf {
        let expanded = PathBuf::from(shellexpand::tilde(raw.trim()).into_owned());
        if expanded.is_absolute() {
            return expanded;
        }

        match including_file.parent() {
            Some(dir) => dir.join(expanded),
            None => expanded,
        }
    }

    /// Pushes `path` onto the chain.
    ///
    /// Returns the canonical path that was entered.
    ///
    /// # Errors
    /// - `ParseError::Io` if the path cannot be canonicalised (missing file)
    /// - `ParseError::Cycle` if the file is already on the chain
    /// - `ParseError::IncludeTooDeep` if the depth limit is reached
    pub fn enter(&mut self, path: &Path) -> Result<PathBuf, ParseError> {
        let canonical = fs::canonicalize(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if self.chain.contains(&canonical) {
            return Err(ParseError::Cycle {
                path: canonical,
                chain: self.chain.clone(),
            });
        }

        if self.chain.len() >= self.max_depth {
            return Err(ParseError::IncludeTooDeep {
                path: canonical,
                limit: self.max_depth,
            });
        }

        self.chain.push(canonical.clone());
        Ok(canonical)
    }

    /// Pops the innermost file off the chain.
    pub fn leave(&mut self) {
        self.chain.pop();
    }

    /// Reads a whole file. The handle is closed before this returns.
    pub fn read(path: &Path) -> Result<String, ParseError> {
        fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for SourceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_relative_path_uses_including_directory() {
        let resolved = SourceResolver::resolve("conf/binds.conf", Path::new("/home/u/.config/hypr/hyprland.conf"));
        assert_eq!(resolved, PathBuf::from("/home/u/.config/hypr/conf/binds.conf"));
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let resolved = SourceResolver::resolve("/etc/hypr/extra.conf", Path::new("/home/u/hyprland.conf"));
        assert_eq!(resolved, PathBuf::from("/etc/hypr/extra.conf"));
    }

    #[test]
    fn test_tilde_is_expanded() {
        let resolved = SourceResolver::resolve("~/extra.conf", Path::new("/tmp/hyprland.conf"));
        assert!(!resolved.to_string_lossy().starts_with('~'));
        assert!(resolved.ends_with("extra.conf"));
    }

    #[test]
    fn test_enter_detects_cycle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.conf");
        fs::write(&path, "").unwrap();

        let mut resolver = SourceResolver::new();
        resolver.enter(&path).unwrap();

        // Same file through a different spelling
        let aliased = temp_dir.path().join(".").join("a.conf");
        match resolver.enter(&aliased) {
            Err(ParseError::Cycle { chain, .. }) => assert_eq!(chain.len(), 1),
            other => panic!("Expected Cycle error, got: {:?}", other),
        }

        resolver.leave();
        assert_eq!(resolver.depth(), 0);
        assert!(resolver.enter(&aliased).is_ok());
    }

    #[test]
    fn test_enter_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut resolver = SourceResolver::new();

        let result = resolver.enter(&temp_dir.path().join("missing.conf"));
        assert!(matches!(result, Err(ParseError::Io { .. })));
    }

    #[test]
    fn test_depth_limit() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("1.conf");
        let second = temp_dir.path().join("2.conf");
        fs::write(&first, "").unwrap();
        fs::write(&second, "").unwrap();

        let mut resolver = SourceResolver::with_max_depth(1);
        resolver.enter(&first).unwrap();
        assert!(matches!(
            resolver.enter(&second),
            Err(ParseError::IncludeTooDeep { limit: 1, .. })
        ));
    }
}
