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

//! src/core/classifier.rs
//!
//! Statement recognition for normalised config lines
//!
//! Each semantic line is classified into exactly one `Statement`. The
//! recognisers run in a fixed priority order:
//!
//! 1. Variable definition (`$name = value`)
//! 2. Block opener (`name {`)
//! 3. Block closer (`}`)
//! 4. Bind statement (`bind[flags] = MODS, KEY, DISPATCHER[, COMMAND]`,
//!    with a DESCRIPTION field before the dispatcher for `d` binds)
//! 5. Autostart directive (`exec-once = command`)
//! 6. Source inclusion (`source = path`)
//! 7. Generic setting (`key = value`, only inside a block)
//! 8. Anything else is `Unrecognized`
//!
//! # Architecture
//! The keyword and comma-delimited fields are scanned with nom
//! combinators. Bind commands keep any commas after the dispatcher:
//! `exec, notify-send "a, b"` yields the command `notify-send "a, b"`.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1, take_until, take_while1},
    character::complete::{char, space0},
    combinator::rest,
    sequence::terminated,
    IResult, Parser,
};
use thiserror::Error;

use crate::core::types::{BindType, ExecType, BIND_FLAGS};
use crate::core::variables::is_identifier;

/// Keyword of the source-inclusion directive
pub const SOURCE_KEYWORD: &str = "source";

const BIND_PREFIX: &str = "bind";

/// A classified config statement
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Statement {
    Variable {
        name: String,
        value: String,
    },
    BlockOpen {
        name: String,
    },
    BlockClose,
    Bind {
        bind_type: BindType,
        bind: String,
        description: String,
        dispatcher: String,
        command: String,
    },
    Exec {
        exec_type: ExecType,
        command: String,
    },
    Source {
        path: String,
    },
    Setting {
        key: String,
        value: String,
    },
    Unrecognized,
}

/// A line whose keyword was recognised but whose shape was not
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{message}")]
pub struct MalformedStatement {
    pub message: String,
}

impl MalformedStatement {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Classifies one semantic (normalised, substituted) line.
///
/// `in_block` tells whether a `{ ... }` block is currently open; generic
/// `key = value` lines are only settings inside a block.
///
/// # Example
/// ```
/// use hyprkeys::core::classifier::{classify, Statement};
///
/// let statement = classify("bind = SUPER, Q, killactive,", false).unwrap();
/// assert!(matches!(statement, Statement::Bind { .. }));
/// ```
pub fn classify(line: &str, in_block: bool) -> Result<Statement, MalformedStatement> {
    let line = line.trim();

    if line.starts_with('$') {
        return classify_variable(line);
    }

    if let Some(name) = line.strip_suffix('{').filter(|n| !n.contains('=')) {
        let name = name.trim();
        if name.is_empty() {
            return Err(MalformedStatement::new("block opener without a name"));
        }
        return Ok(Statement::BlockOpen {
            name: name.to_string(),
        });
    }

    if line == "}" {
        return Ok(Statement::BlockClose);
    }

    if let Ok((args, keyword)) = parse_keyword(line) {
        if let Some(bind_type) = BindType::from_keyword(keyword) {
            return classify_bind(bind_type, args);
        }

        if let Some(exec_type) = ExecType::from_keyword(keyword) {
            let command = args.trim();
            if command.is_empty() {
                return Err(MalformedStatement::new(format!("`{}` without a command", keyword)));
            }
            return Ok(Statement::Exec {
                exec_type,
                command: command.to_string(),
            });
        }

        if keyword == SOURCE_KEYWORD {
            let path = args.trim();
            if path.is_empty() {
                return Err(MalformedStatement::new("`source` without a path"));
            }
            return Ok(Statement::Source {
                path: path.to_string(),
            });
        }

        if !in_block && keyword.starts_with(BIND_PREFIX) {
            return Err(MalformedStatement::new(format!(
                "`{}` has unknown bind flags (expected letters from `{}`)",
                keyword, BIND_FLAGS
            )));
        }
    }

    if in_block {
        if let Ok((_, (key, value))) = parse_assignment(line) {
            return Ok(Statement::Setting {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }

    Ok(Statement::Unrecognized)
}

/// Splits `key = value` into trimmed halves at the first `=`.
///
/// Returns None if there is no `=` or the key is empty.
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
    parse_assignment(line).ok().map(|(_, kv)| kv)
}

fn classify_variable(line: &str) -> Result<Statement, MalformedStatement> {
    let Some((lhs, value)) = split_assignment(line) else {
        return Err(MalformedStatement::new("variable declaration without `=`"));
    };

    let name = lhs.trim_start_matches('$').trim();
    if !is_identifier(name) {
        return Err(MalformedStatement::new(format!("invalid variable name `{}`", lhs)));
    }

    Ok(Statement::Variable {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn classify_bind(bind_type: BindType, args: &str) -> Result<Statement, MalformedStatement> {
    let shape = || {
        let fields = if bind_type.has_description() {
            "MODS, KEY, DESCRIPTION, DISPATCHER[, COMMAND]"
        } else {
            "MODS, KEY, DISPATCHER[, COMMAND]"
        };
        MalformedStatement::new(format!("`{}` expects {}", bind_type, fields))
    };

    let (after_mods, mods) = comma_field(args).map_err(|_| shape())?;
    let (after_key, key) = comma_field(after_mods).map_err(|_| shape())?;
    let (after_description, description) = if bind_type.has_description() {
        comma_field(after_key).map_err(|_| shape())?
    } else {
        (after_key, "")
    };
    let (command, dispatcher) = last_field(after_description).map_err(|_| shape())?;

    let dispatcher = dispatcher.trim();
    if key.trim().is_empty() {
        return Err(MalformedStatement::new(format!("`{}` is missing a key", bind_type)));
    }
    if dispatcher.is_empty() {
        return Err(MalformedStatement::new(format!(
            "`{}` is missing a dispatcher",
            bind_type
        )));
    }

    // Modifiers and key exactly as written, without the trailing comma
    let bind = args[..mods.len() + 1 + key.len()].trim();

    Ok(Statement::Bind {
        bind_type,
        bind: bind.to_string(),
        description: description.trim().to_string(),
        dispatcher: dispatcher.to_string(),
        command: command.trim().to_string(),
    })
}

fn is_keyword_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Parses `keyword =` and returns the keyword with the remaining input.
pub fn parse_keyword(input: &str) -> IResult<&str, &str> {
    terminated(take_while1(is_keyword_char), (space0, char('='), space0)).parse(input)
}

/// Parses `key = value` where key is anything up to the first `=`.
fn parse_assignment(input: &str) -> IResult<&str, (&str, &str)> {
    let parsed: IResult<&str, &str> =
        terminated(take_till1(|c: char| c == '='), tag("=")).parse(input);
    let (value, key) = parsed?;
    let key = key.trim();
    if key.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TakeTill1,
        )));
    }
    Ok(("", (key, value.trim())))
}

/// One comma-terminated field; the comma is consumed.
fn comma_field(input: &str) -> IResult<&str, &str> {
    terminated(take_until(","), char(',')).parse(input)
}

/// A comma-terminated field, or everything that is left.
fn last_field(input: &str) -> IResult<&str, &str> {
    alt((comma_field, rest)).parse(input)
}
