//! Markdown export
//!
//! ```text
//! #### $mainMod = SUPER
//!
//! | Keybind | Dispatcher | Command | Comments |
//! |---------|------------|---------|----------|
//! | <kbd>SUPER, Q</kbd> | killactive |  | close window |
//! ```

use crate::core::types::{ConfigModel, Keybind};

const TABLE_HEADER: &str = "| Keybind | Dispatcher | Command | Comments |\n|---------|------------|---------|----------|\n";

/// Renders keywords as headings followed by a table of binds.
pub fn render(model: &ConfigModel) -> String {
    let mut out = String::new();

    for keyword in &model.keywords {
        out.push_str(&format!("#### {}\n", keyword));
    }
    out.push('\n');
    out.push_str(TABLE_HEADER);

    for bind in &model.binds {
        out.push_str(&table_row(bind));
        out.push('\n');
    }

    out
}

/// One table row. Pipes inside cells are escaped.
pub fn table_row(bind: &Keybind) -> String {
    format!(
        "| <kbd>{}</kbd> | {} | {} | {} |",
        bind.bind,
        bind.dispatcher,
        escape_cell(&bind.command),
        escape_cell(&bind.comments)
    )
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
