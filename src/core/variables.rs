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

//! src/core/variables.rs
//!
//! Variable table for `$name = value` declarations
//!
//! Hyprland configs use variables like:
//! ```hyprland
//! $mainMod = SUPER
//! $terminal = kitty
//! ```
//!
//! Definitions are applied in encounter order (last write wins) and only
//! affect lines read after them. Substitution is a single left-to-right
//! pass: a substituted value is never rescanned, and unknown `$name`
//! tokens are left untouched.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// `$` followed by the longest identifier run
#[allow(clippy::expect_used)]
static VARIABLE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([A-Za-z0-9_]+)").expect("variable reference pattern should be valid regex")
});

/// Returns true if `name` is a legal variable identifier.
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Name → value bindings shared across the whole inclusion graph
#[derive(Clone, Debug, Default)]
pub struct VariableTable {
    values: HashMap<String, String>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a binding.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replaces every known `$name` in `line` with its current value.
    ///
    /// # Example
    /// ```
    /// use hyprkeys::core::variables::VariableTable;
    ///
    /// let mut vars = VariableTable::new();
    /// vars.define("mainMod", "SUPER");
    /// assert_eq!(vars.substitute("bind = $mainMod, K"), "bind = SUPER, K");
    /// assert_eq!(vars.substitute("bind = $other, K"), "bind = $other, K");
    /// ```
    pub fn substitute(&self, line: &str) -> String {
        if self.values.is_empty() || !line.contains('$') {
            return line.to_string();
        }

        VARIABLE_REF
            .replace_all(line, |caps: &Captures<'_>| match self.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
