//! Source inclusion tests
//!
//! Every test builds a small config tree in a temporary directory.

use crate::core::{parser::read_config, ConfigReader, DiagnosticKind, ParseError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper: Writes `content` to `name` inside `dir` and returns the path.
fn write_conf(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_variable_from_sourced_file() {
    let temp_dir = TempDir::new().unwrap();
    write_conf(temp_dir.path(), "extra.conf", "$mod = ALT\n");
    let root = write_conf(
        temp_dir.path(),
        "hyprland.conf",
        "source = ./extra.conf\nbind = $mod, Q, killactive,\n",
    );

    let report = read_config(&root).unwrap();
    assert_eq!(report.config.binds[0].bind, "ALT, Q");
    assert_eq!(report.config.keywords.len(), 1);
}

#[test]
fn test_inclusion_order_is_preserved() {
    let temp_dir = TempDir::new().unwrap();
    write_conf(
        temp_dir.path(),
        "conf/binds.conf",
        "bind = SUPER, 2, workspace, 2\nsource = nested.conf\nbind = SUPER, 4, workspace, 4\n",
    );
    write_conf(temp_dir.path(), "conf/nested.conf", "bind = SUPER, 3, workspace, 3\n");
    let root = write_conf(
        temp_dir.path(),
        "hyprland.conf",
        "bind = SUPER, 1, workspace, 1\nsource = conf/binds.conf\nbind = SUPER, 5, workspace, 5\n",
    );

    let report = read_config(&root).unwrap();
    let commands: Vec<&str> = report.config.binds.iter().map(|b| b.command.as_str()).collect();
    assert_eq!(commands, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_categories_merge_across_files() {
    let temp_dir = TempDir::new().unwrap();
    write_conf(temp_dir.path(), "look.conf", "general {\n gaps_in = 3\n border_size = 1\n}\n");
    let root = write_conf(
        temp_dir.path(),
        "hyprland.conf",
        "general {\n gaps_in = 5\n}\nsource = look.conf\n",
    );

    let report = read_config(&root).unwrap();
    assert_eq!(report.config.settings.len(), 1);
    let general = &report.config.settings[0].settings;
    assert_eq!(general.get("gaps_in").unwrap(), "3");
    assert_eq!(general.get("border_size").unwrap(), "1");
}

#[test]
fn test_open_block_carries_into_sourced_file() {
    let temp_dir = TempDir::new().unwrap();
    write_conf(temp_dir.path(), "input.conf", "kb_layout = se\n");
    let root = write_conf(
        temp_dir.path(),
        "hyprland.conf",
        "input {\nsource = input.conf\n}\n",
    );

    let report = read_config(&root).unwrap();
    let input = report.config.category("input").unwrap();
    assert_eq!(input.settings.get("kb_layout").unwrap(), "se");
}

#[test]
fn test_source_path_from_variable() {
    let temp_dir = TempDir::new().unwrap();
    write_conf(temp_dir.path(), "parts/keys.conf", "bind = SUPER, Q, killactive,\n");
    let root = write_conf(
        temp_dir.path(),
        "hyprland.conf",
        "$parts = parts\nsource = $parts/keys.conf\n",
    );

    let report = read_config(&root).unwrap();
    assert_eq!(report.config.binds.len(), 1);
}

#[test]
fn test_self_inclusion_is_a_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let root = write_conf(temp_dir.path(), "hyprland.conf", "source = hyprland.conf\n");

    match read_config(&root) {
        Err(ParseError::Cycle { chain, .. }) => assert_eq!(chain.len(), 1),
        other => panic!("Expected Cycle error, got: {:?}", other),
    }
}

#[test]
fn test_transitive_cycle() {
    let temp_dir = TempDir::new().unwrap();
    write_conf(temp_dir.path(), "a.conf", "source = b.conf\n");
    write_conf(temp_dir.path(), "b.conf", "source = a.conf\n");
    let root = write_conf(temp_dir.path(), "hyprland.conf", "source = a.conf\n");

    assert!(matches!(read_config(&root), Err(ParseError::Cycle { .. })));
}

#[test]
fn test_same_file_sourced_twice_is_not_a_cycle() {
    let temp_dir = TempDir::new().unwrap();
    write_conf(temp_dir.path(), "colors.conf", "$accent = ff0000\n");
    let root = write_conf(
        temp_dir.path(),
        "hyprland.conf",
        "source = colors.conf\nsource = colors.conf\n",
    );

    let report = read_config(&root).unwrap();
    assert_eq!(report.config.keywords.len(), 2);
}

#[test]
fn test_missing_root_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = read_config(&temp_dir.path().join("missing.conf"));

    assert!(matches!(result, Err(ParseError::Io { .. })));
}

#[test]
fn test_missing_include_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = write_conf(temp_dir.path(), "hyprland.conf", "source = nope.conf\n");

    match read_config(&root) {
        Err(ParseError::Io { path, .. }) => assert!(path.ends_with("nope.conf")),
        other => panic!("Expected Io error, got: {:?}", other),
    }
}

#[test]
fn test_include_depth_limit() {
    let temp_dir = TempDir::new().unwrap();
    write_conf(temp_dir.path(), "c.conf", "");
    write_conf(temp_dir.path(), "b.conf", "source = c.conf\n");
    let root = write_conf(temp_dir.path(), "a.conf", "source = b.conf\n");

    let result = ConfigReader::new().with_max_include_depth(2).read(&root);
    assert!(matches!(result, Err(ParseError::IncludeTooDeep { limit: 2, .. })));
}

#[test]
fn test_diagnostics_point_at_included_file() {
    let temp_dir = TempDir::new().unwrap();
    write_conf(temp_dir.path(), "broken.conf", "\n\nbind = SUPER\n");
    let root = write_conf(temp_dir.path(), "hyprland.conf", "source = broken.conf\n");

    let report = read_config(&root).unwrap();
    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::MalformedStatement);
    assert!(diagnostic.location.file.ends_with("broken.conf"));
    assert_eq!(diagnostic.location.line, 3);
}
