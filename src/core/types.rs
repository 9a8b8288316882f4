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

//! src/core/types.rs
//!
//! Core type definitions for the parsed configuration model
//!
//! This module defines the structures produced by the reader:
//! - `ConfigModel`: Root aggregate holding every parsed statement
//! - `Keyword`: A `$name = value` declaration
//! - `Keybind`: A bind statement with its trailing comment
//! - `Category`: A `name { ... }` settings block
//! - `AutoStartEntry`: An `exec`/`exec-once` directive
//!
//! Field names serialise in PascalCase so the JSON export keeps the
//! shape existing hyprkeys consumers expect.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Flag letters Hyprland accepts after `bind`
///
/// `l` locked, `r` release, `o` long press, `e` repeat, `n` non-consuming,
/// `m` mouse, `t` transparent, `i` ignore mods, `s` separate,
/// `d` has description, `p` bypasses inhibitors, `c` click, `g` drag,
/// `u` submap universal.
pub const BIND_FLAGS: &str = "lroenmtisdpcgu";

/// Type of keybinding
///
/// Hyprland encodes bind behaviour as flag letters appended to `bind`,
/// combined freely and in any order (`bindle`, `bindel`, `bindlr`,
/// `bindd`, ...). The keyword is kept exactly as written so exports
/// reproduce it.
///
/// # Example
/// ```
/// use hyprkeys::core::BindType;
///
/// let bind_type = BindType::from_keyword("bindlr").unwrap();
/// assert!(bind_type.has_flag('l'));
/// assert_eq!(bind_type.flags(), "lr");
/// assert!(BindType::from_keyword("bindx").is_none());
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct BindType(Cow<'static, str>);

impl BindType {
    /// Standard keybinding
    pub const BIND: BindType = BindType(Cow::Borrowed("bind"));
    /// Repeat on hold
    pub const BIND_E: BindType = BindType(Cow::Borrowed("binde"));
    /// Works on locked screen
    pub const BIND_L: BindType = BindType(Cow::Borrowed("bindl"));
    /// Mouse binding
    pub const BIND_M: BindType = BindType(Cow::Borrowed("bindm"));
    /// Trigger on release
    pub const BIND_R: BindType = BindType(Cow::Borrowed("bindr"));
    /// Non-consuming
    pub const BIND_N: BindType = BindType(Cow::Borrowed("bindn"));
    /// Carries a description field before the dispatcher
    pub const BIND_D: BindType = BindType(Cow::Borrowed("bindd"));
    /// Repeat on hold + locked screen
    pub const BIND_EL: BindType = BindType(Cow::Borrowed("bindel"));
    /// Locked screen + repeat on hold
    pub const BIND_LE: BindType = BindType(Cow::Borrowed("bindle"));

    /// Looks up a bind type by its keyword: `bind` followed by any
    /// combination of `BIND_FLAGS` letters.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let flags = keyword.strip_prefix("bind")?;
        if !flags.chars().all(|c| BIND_FLAGS.contains(c)) {
            return None;
        }
        Some(BindType(Cow::Owned(keyword.to_string())))
    }

    /// The literal statement keyword.
    pub fn keyword(&self) -> &str {
        &self.0
    }

    /// Flag letters after `bind`, in written order.
    pub fn flags(&self) -> &str {
        &self.0["bind".len()..]
    }

    pub fn has_flag(&self, flag: char) -> bool {
        self.flags().contains(flag)
    }

    /// True for `d` binds, whose third field is a description.
    pub fn has_description(&self) -> bool {
        self.has_flag('d')
    }
}

impl fmt::Display for BindType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl TryFrom<String> for BindType {
    type Error = String;

    fn try_from(keyword: String) -> Result<Self, Self::Error> {
        Self::from_keyword(&keyword).ok_or_else(|| format!("unknown bind keyword `{}`", keyword))
    }
}

impl From<BindType> for String {
    fn from(bind_type: BindType) -> Self {
        bind_type.0.into_owned()
    }
}

/// Kind of autostart directive
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ExecType {
    /// Runs once when the compositor starts
    #[serde(rename = "exec-once")]
    ExecOnce,
    /// Runs on every config (re)load
    #[serde(rename = "exec")]
    Exec,
    /// `exec-once` without the window rules wrapper
    #[serde(rename = "execr-once")]
    ExecROnce,
    /// `exec` without the window rules wrapper
    #[serde(rename = "execr")]
    ExecR,
}

impl ExecType {
    pub const ALL: [ExecType; 4] = [
        ExecType::ExecOnce,
        ExecType::Exec,
        ExecType::ExecROnce,
        ExecType::ExecR,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            ExecType::ExecOnce => "exec-once",
            ExecType::Exec => "exec",
            ExecType::ExecROnce => "execr-once",
            ExecType::ExecR => "execr",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.keyword() == keyword)
    }

    /// True for the one-shot-at-launch variants.
    pub fn is_once(self) -> bool {
        matches!(self, ExecType::ExecOnce | ExecType::ExecROnce)
    }
}

impl fmt::Display for ExecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A `$name = value` declaration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Keyword {
    /// Variable name without the leading `$`
    pub name: String,
    /// Value after substitution of previously defined variables
    pub value: String,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} = {}", self.name, self.value)
    }
}

/// A complete bind statement
///
/// `bind` keeps the modifier and key fields exactly as written
/// (after variable substitution), e.g. `"SUPER SHIFT, Q"`.
///
/// # Example
/// ```ignore
/// // bind = SUPER, Return, exec, kitty # terminal
/// let bind = Keybind {
///     bind_type: BindType::BIND,
///     bind: "SUPER, Return".to_string(),
///     description: String::new(),
///     dispatcher: "exec".to_string(),
///     command: "kitty".to_string(),
///     comments: "terminal".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Keybind {
    /// Statement keyword (bind, binde, bindm, ...)
    pub bind_type: BindType,

    /// Modifier + key combination, comma-joined as written
    pub bind: String,

    /// Description field of `d` binds, empty otherwise
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Hyprland dispatcher name (e.g., "exec", "killactive", "workspace")
    pub dispatcher: String,

    /// Dispatcher arguments, empty when absent. May contain commas.
    pub command: String,

    /// Trailing comment text on the same line, empty when absent
    pub comments: String,
}

impl fmt::Display for Keybind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}, ", self.bind_type, self.bind)?;
        if self.bind_type.has_description() {
            write!(f, "{}, ", self.description)?;
        }
        f.write_str(&self.dispatcher)?;

        if !self.command.is_empty() {
            write!(f, ", {}", self.command)?;
        }

        Ok(())
    }
}

/// A named `{ ... }` block of settings
///
/// Settings are kept in a sorted map so exports are deterministic.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Category {
    pub name: String,
    pub settings: BTreeMap<String, String>,
    pub sub_categories: Vec<Category>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Looks up a direct sub-category by name.
    pub fn sub_category(&self, name: &str) -> Option<&Category> {
        self.sub_categories.iter().find(|c| c.name == name)
    }

    /// Folds `other` into `self`.
    ///
    /// Settings from `other` overwrite existing keys, sub-categories are
    /// merged by name and appended in first-seen order otherwise.
    pub fn merge(&mut self, other: Category) {
        self.settings.extend(other.settings);

        for sub in other.sub_categories {
            match self.sub_categories.iter_mut().find(|c| c.name == sub.name) {
                Some(existing) => existing.merge(sub),
                None => self.sub_categories.push(sub),
            }
        }
    }
}

/// An autostart directive
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoStartEntry {
    pub exec_type: ExecType,
    /// Command line, verbatim after variable substitution
    pub command: String,
}

/// Root aggregate returned by the reader
///
/// Every sequence preserves encounter order across the root file and
/// all of its inclusions.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigModel {
    pub keywords: Vec<Keyword>,
    pub binds: Vec<Keybind>,
    pub settings: Vec<Category>,
    pub auto_start: Vec<AutoStartEntry>,
}

impl ConfigModel {
    /// Looks up a top-level category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.settings.iter().find(|c| c.name == name)
    }

    /// Adds a completed top-level category, merging with an existing
    /// category of the same name.
    pub(crate) fn push_category(&mut self, category: Category) {
        match self.settings.iter_mut().find(|c| c.name == category.name) {
            Some(existing) => existing.merge(category),
            None => self.settings.push(category),
        }
    }
}
