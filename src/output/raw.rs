//! Normalised config text export
//!
//! Section order: settings categories (optional), autostart directives
//! (optional), binds, then variable declarations. Category settings are
//! emitted in key order; the original comments and spacing are not kept
//! apart from each bind's trailing comment.

use crate::core::types::{Category, ConfigModel};

/// Renders `model` as config text.
///
/// Binds are written in the comma-separated form the reader accepts, so
/// the output can be sourced back into Hyprland.
pub fn render(model: &ConfigModel, include_settings: bool, include_autostart: bool) -> String {
    let mut out = String::new();

    if include_settings {
        for category in &model.settings {
            write_category(&mut out, category, 0);
        }
    }

    if include_autostart {
        for entry in &model.auto_start {
            out.push_str(&format!("{}={}\n", entry.exec_type, entry.command));
        }
    }

    for bind in &model.binds {
        out.push_str(&bind.to_string());
        if !bind.comments.is_empty() {
            out.push_str(&format!(" # {}", bind.comments));
        }
        out.push('\n');
    }

    for keyword in &model.keywords {
        out.push_str(&format!("{}\n", keyword));
    }

    out
}

fn write_category(out: &mut String, category: &Category, depth: usize) {
    let indent = "\t".repeat(depth);

    out.push_str(&format!("{}{} {{\n", indent, category.name));
    for (key, value) in &category.settings {
        out.push_str(&format!("{}\t{} = {}\n", indent, key, value));
    }
    for sub in &category.sub_categories {
        write_category(out, sub, depth + 1);
    }
    out.push_str(&format!("{}}}\n", indent));
}
