//! Substring filtering over parsed binds
//!
//! Filtering never mutates the parsed model; it derives a new sequence
//! (or a new model) that keeps the original order.

use crate::core::types::{ConfigModel, Keybind};

/// Returns the binds whose dispatcher or command contains `needle`.
///
/// An empty needle keeps every bind.
pub fn filter_binds(binds: &[Keybind], needle: &str) -> Vec<Keybind> {
    binds
        .iter()
        .filter(|bind| bind.dispatcher.contains(needle) || bind.command.contains(needle))
        .cloned()
        .collect()
}

impl ConfigModel {
    /// Copy of this model with only the binds matching `needle`.
    pub fn with_binds_filtered(&self, needle: &str) -> ConfigModel {
        ConfigModel {
            binds: filter_binds(&self.binds, needle),
            ..self.clone()
        }
    }
}
