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

//! src/core/blocks.rs
//!
//! Nesting tracker for `name { ... }` blocks
//!
//! The model keeps two levels: top-level categories and one level of
//! sub-categories. Blocks nested deeper are flattened into the deepest
//! kept level, with the extra block names prefixed to each key:
//!
//! ```hyprland
//! plugin {
//!     hyprbars {
//!         buttons {
//!             size = 12     # stored in `hyprbars` as `buttons:size`
//!         }
//!     }
//! }
//! ```
//!
//! Re-opened blocks accumulate into the existing category when they
//! close, so two `general { }` blocks end up as one `Category`.

use tracing::debug;

use crate::core::diagnostics::SourceLocation;
use crate::core::types::Category;

/// Deepest nesting kept as a distinct `Category`
pub const MAX_CATEGORY_DEPTH: usize = 2;

#[derive(Debug)]
struct OpenBlock {
    /// For flattened levels this only carries the name
    category: Category,
    opened_at: SourceLocation,
}

/// Result of closing the innermost block
#[derive(Debug, PartialEq)]
pub enum CloseOutcome {
    /// A top-level block finished and is ready for the model
    Completed(Category),
    /// A nested block finished and was folded into its parent
    Nested,
    /// There was no open block
    Unbalanced,
}

/// Stack of in-progress categories
#[derive(Debug, Default)]
pub struct BlockTracker {
    stack: Vec<OpenBlock>,
}

impl BlockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open blocks.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Opens a block named `name`.
    pub fn open(&mut self, name: &str, opened_at: SourceLocation) {
        if self.stack.len() >= MAX_CATEGORY_DEPTH {
            debug!(block = name, location = %opened_at, "flattening nested block");
        }

        self.stack.push(OpenBlock {
            category: Category::new(name),
            opened_at,
        });
    }

    /// Closes the innermost block.
    pub fn close(&mut self) -> CloseOutcome {
        let Some(block) = self.stack.pop() else {
            return CloseOutcome::Unbalanced;
        };

        match self.stack.len() {
            0 => CloseOutcome::Completed(block.category),
            1 => {
                let parent = &mut self.stack[0].category;
                match parent
                    .sub_categories
                    .iter_mut()
                    .find(|c| c.name == block.category.name)
                {
                    Some(existing) => existing.merge(block.category),
                    None => parent.sub_categories.push(block.category),
                }
                CloseOutcome::Nested
            }
            // Flattened level: its settings already live in the deepest kept category
            _ => CloseOutcome::Nested,
        }
    }

    /// Stores `key = value` in the innermost open category.
    ///
    /// Returns false when no block is open.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        if self.stack.is_empty() {
            return false;
        }

        let kept = self.stack.len().min(MAX_CATEGORY_DEPTH);
        let key = if self.stack.len() > MAX_CATEGORY_DEPTH {
            let mut path: Vec<&str> = self.stack[MAX_CATEGORY_DEPTH..]
                .iter()
                .map(|b| b.category.name.as_str())
                .collect();
            path.push(key);
            path.join(":")
        } else {
            key.to_string()
        };

        self.stack[kept - 1]
            .category
            .settings
            .insert(key, value.to_string());
        true
    }

    /// Implicitly closes every block still open at end of input.
    ///
    /// Returns the completed top-level category (if any) and the
    /// locations of the blocks that were never closed, outermost first.
    pub fn finish(&mut self) -> (Option<Category>, Vec<SourceLocation>) {
        let unclosed: Vec<SourceLocation> = self
            .stack
            .iter()
            .map(|b| b.opened_at.clone())
            .collect();

        let mut completed = None;
        while !self.stack.is_empty() {
            if let CloseOutcome::Completed(category) = self.close() {
                completed = Some(category);
            }
        }

        (completed, unclosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn at(line: usize) -> SourceLocation {
        SourceLocation::new(Path::new("test.conf"), line)
    }

    #[test]
    fn test_single_block_completes() {
        let mut tracker = BlockTracker::new();
        tracker.open("general", at(1));
        assert!(tracker.set("gaps_in", "5"));

        let CloseOutcome::Completed(category) = tracker.close() else {
            panic!("Expected a completed top-level category");
        };
        assert_eq!(category.name, "general");
        assert_eq!(category.settings.get("gaps_in").map(String::as_str), Some("5"));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_sub_category_is_attached_to_parent() {
        let mut tracker = BlockTracker::new();
        tracker.open("input", at(1));
        tracker.set("kb_layout", "us");
        tracker.open("touchpad", at(3));
        tracker.set("natural_scroll", "true");
        assert_eq!(tracker.close(), CloseOutcome::Nested);

        let CloseOutcome::Completed(input) = tracker.close() else {
            panic!("Expected input to complete");
        };
        let touchpad = input.sub_category("touchpad").unwrap();
        assert_eq!(touchpad.settings.get("natural_scroll").unwrap(), "true");
        assert_eq!(input.settings.get("kb_layout").unwrap(), "us");
    }

    #[test]
    fn test_repeated_sub_category_merges() {
        let mut tracker = BlockTracker::new();
        tracker.open("input", at(1));
        tracker.open("touchpad", at(2));
        tracker.set("a", "1");
        tracker.close();
        tracker.open("touchpad", at(5));
        tracker.set("a", "2");
        tracker.set("b", "3");
        tracker.close();

        let CloseOutcome::Completed(input) = tracker.close() else {
            panic!("Expected input to complete");
        };
        assert_eq!(input.sub_categories.len(), 1);
        let touchpad = &input.sub_categories[0];
        assert_eq!(touchpad.settings.get("a").unwrap(), "2");
        assert_eq!(touchpad.settings.get("b").unwrap(), "3");
    }

    #[test]
    fn test_deep_nesting_is_flattened() {
        let mut tracker = BlockTracker::new();
        tracker.open("plugin", at(1));
        tracker.open("hyprbars", at(2));
        tracker.open("buttons", at(3));
        tracker.set("size", "12");
        tracker.close();
        tracker.close();

        let CloseOutcome::Completed(plugin) = tracker.close() else {
            panic!("Expected plugin to complete");
        };
        let bars = plugin.sub_category("hyprbars").unwrap();
        assert_eq!(bars.settings.get("buttons:size").unwrap(), "12");
        assert!(bars.sub_categories.is_empty());
    }

    #[test]
    fn test_close_without_open_is_unbalanced() {
        let mut tracker = BlockTracker::new();
        assert_eq!(tracker.close(), CloseOutcome::Unbalanced);
        assert!(!tracker.set("key", "value"));
    }

    #[test]
    fn test_finish_closes_open_blocks() {
        let mut tracker = BlockTracker::new();
        tracker.open("input", at(1));
        tracker.open("touchpad", at(2));
        tracker.set("natural_scroll", "true");

        let (completed, unclosed) = tracker.finish();
        let input = completed.unwrap();
        assert!(input.sub_category("touchpad").is_some());
        assert_eq!(unclosed, vec![at(1), at(2)]);
        assert!(tracker.is_empty());
    }
}
