//! Invocation options and output file handling.
//!
//! This module holds everything the command line hands to the library:
//!
//! - **Options bundle**: which file to read, how to render it, what to filter
//! - **Path expansion**: `~` in user-supplied paths via `shellexpand`
//! - **Atomic output**: `--output` files are written temp-file-then-rename,
//!   so an interrupted run never leaves a half-written export behind
//!
//! The reader itself only consumes `config_path`; everything else applies
//! after the model is built.
//!
//! # Example
//!
//! ```no_run
//! use hyprkeys::config::{Options, OutputFormat};
//! use hyprkeys::core::read_config;
//!
//! let options = Options::new(OutputFormat::Json);
//! let report = read_config(&options.config_path)?;
//! println!("{} binds", report.config.binds.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;

pub use error::ConfigError;

use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where Hyprland keeps its main config unless told otherwise
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/hypr/hyprland.conf";

/// Selected presentation of the parsed model
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// Keyword headings plus a keybind table
    Markdown,
    /// Normalised config text
    Raw,
    /// Pretty-printed JSON of the whole model
    Json,
}

/// Everything a single run needs to know
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// Root config file, already tilde-expanded
    pub config_path: PathBuf,
    pub format: OutputFormat,
    /// Keep only binds whose dispatcher or command contains this
    pub filter: Option<String>,
    /// Also write the rendered output to this file
    pub output: Option<PathBuf>,
    /// Raw output: include the settings categories
    pub include_variables: bool,
    /// Raw output: include autostart directives
    pub include_autostart: bool,
}

impl Options {
    /// Options for the default config path.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config_path: PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).into_owned()),
            format,
            filter: None,
            output: None,
            include_variables: false,
            include_autostart: false,
        }
    }
}

/// Expands a leading `~` in `path`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidPath` when the path is not valid UTF-8.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;
    Ok(PathBuf::from(shellexpand::tilde(raw).into_owned()))
}

/// Atomically writes `content` to `path`.
///
/// Either the whole content lands or the previous file stays untouched.
pub fn write_output(path: &Path, content: &str) -> Result<(), ConfigError> {
    let failed = |message: String| ConfigError::WriteFailed {
        path: path.to_path_buf(),
        message,
    };

    let mut file = AtomicWriteFile::options()
        .open(path)
        .map_err(|e| failed(format!("Failed to open for atomic write: {}", e)))?;

    file.write_all(content.as_bytes())
        .map_err(|e| failed(format!("Failed to write content: {}", e)))?;

    file.commit()
        .map_err(|e| failed(format!("Failed to commit atomic write: {}", e)))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote output file");
    Ok(())
}

#[cfg(test)]
mod tests;
