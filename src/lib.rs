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

//! hyprkeys
//!
//! Reads a Hyprland configuration (following every `source` directive)
//! into a structured model and exports it as Markdown, raw config text
//! or JSON.
//!
//! # Features
//!
//! - **Variables:** `$name = value` declarations, substituted in order
//! - **Binds:** every bind flavour, with trailing comments kept
//! - **Settings:** `name { ... }` blocks merged into categories
//! - **Autostart:** `exec` and `exec-once` directives
//! - **Includes:** `source = path` with cycle protection
//! - **Diagnostics:** malformed lines are reported, never fatal
//!
//! # Architecture
//!
//! - **`core`:** Data model and reader pipeline (no I/O beyond reading files)
//! - **`config`:** Invocation options and atomic output writing
//! - **`output`:** Markdown, raw and JSON renderers
//! - **`logging`:** `tracing` subscriber setup for the binary
//!
//! # Examples
//!
//! ## Reading a config file
//!
//! ```no_run
//! use hyprkeys::core::read_config;
//! use std::path::Path;
//!
//! let report = read_config(Path::new("/tmp/hyprland.conf"))?;
//! println!("Found {} keybindings", report.config.binds.len());
//! for diagnostic in &report.diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Filtering binds
//!
//! ```no_run
//! use hyprkeys::core::read_config;
//! # use std::path::Path;
//! # let report = read_config(Path::new("/tmp/hyprland.conf"))?;
//!
//! let launchers = report.config.with_binds_filtered("exec");
//! println!("{} exec binds", launchers.binds.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod output;

// Re-export commonly used types for convenience
pub use crate::core::{AutoStartEntry, BindType, Category, ConfigModel, ExecType, Keybind, Keyword};
