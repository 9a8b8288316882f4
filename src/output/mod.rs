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

//! Presentation of a parsed `ConfigModel`
//!
//! Three order-preserving renderers:
//! - `markdown`: keyword headings and a keybind table for docs/READMEs
//! - `raw`: normalised config text
//! - JSON: the serde representation of the model

pub mod markdown;
pub mod raw;

use crate::config::{ConfigError, Options, OutputFormat};
use crate::core::types::ConfigModel;

/// Renders `model` in the format selected by `options`.
pub fn render(model: &ConfigModel, options: &Options) -> Result<String, ConfigError> {
    match options.format {
        OutputFormat::Markdown => Ok(markdown::render(model)),
        OutputFormat::Raw => Ok(raw::render(model, options.include_variables, options.include_autostart)),
        OutputFormat::Json => render_json(model),
    }
}

/// Pretty-printed JSON of the whole model.
pub fn render_json(model: &ConfigModel) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(model)?)
}
