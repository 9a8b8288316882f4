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

//! src/core/normalizer.rs
//!
//! Comment and whitespace stripping for single config lines
//!
//! Splits a raw line into its semantic part and the trailing comment.
//! The scan is quote-aware: a `#` inside `"..."` or `'...'` belongs to the
//! command (`exec, notify-send "build #3"`), and a doubled `##` outside
//! quotes is Hyprland's escape for a literal `#`.

/// A line with comments and surrounding whitespace removed
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NormalizedLine {
    /// Everything before the comment marker, trimmed
    pub semantic: String,
    /// Text after the comment marker (marker excluded), trimmed
    pub comment: String,
}

impl NormalizedLine {
    /// True when the line carries nothing for the classifiers.
    pub fn is_empty(&self) -> bool {
        self.semantic.is_empty()
    }
}

/// Splits `raw` into semantic content and trailing comment.
///
/// # Example
/// ```
/// use hyprkeys::core::normalizer::normalize_line;
///
/// let line = normalize_line("  bind = SUPER, Q, killactive, # close window");
/// assert_eq!(line.semantic, "bind = SUPER, Q, killactive,");
/// assert_eq!(line.comment, "close window");
/// ```
pub fn normalize_line(raw: &str) -> NormalizedLine {
    let trimmed = raw.trim();
    if trimmed.is_empty() || (trimmed.starts_with('#') && !trimmed.starts_with("##")) {
        return NormalizedLine::default();
    }

    // An apostrophe left open (`don 't`) is prose, not a quote
    scan(trimmed, &['"', '\''])
        .or_else(|| scan(trimmed, &['"']))
        .or_else(|| scan(trimmed, &[]))
        .unwrap_or_default()
}

/// Quote-aware scan. Returns `None` when a quote is left open.
fn scan(trimmed: &str, quote_chars: &[char]) -> Option<NormalizedLine> {
    let mut semantic = String::with_capacity(trimmed.len());
    let mut quote: Option<char> = None;
    let mut chars = trimmed.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match quote {
            Some(_) if c == '\\' => {
                semantic.push(c);
                if let Some((_, next)) = chars.next() {
                    semantic.push(next);
                }
            }
            Some(open) if c == open => {
                quote = None;
                semantic.push(c);
            }
            Some(_) => semantic.push(c),
            None if quote_chars.contains(&c) && opens_quote(c, &trimmed[..idx]) => {
                quote = Some(c);
                semantic.push(c);
            }
            None if c == '#' => {
                if matches!(chars.peek(), Some((_, '#'))) {
                    chars.next();
                    semantic.push('#');
                    continue;
                }

                return Some(NormalizedLine {
                    semantic: semantic.trim_end().to_string(),
                    comment: trimmed[idx + 1..].trim().to_string(),
                });
            }
            None => semantic.push(c),
        }
    }

    if quote.is_some() {
        return None;
    }

    Some(NormalizedLine {
        semantic,
        comment: String::new(),
    })
}

/// `'` only opens a quote at the start of a word, so the apostrophe in
/// `it's` stays prose.
fn opens_quote(c: char, before: &str) -> bool {
    c != '\'' || !before.chars().next_back().is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines_are_empty() {
        assert!(normalize_line("").is_empty());
        assert!(normalize_line("   \t ").is_empty());
        assert!(normalize_line("# just a comment").is_empty());
        assert!(normalize_line("    #indented comment").is_empty());
    }

    #[test]
    fn test_trailing_comment_is_split() {
        let line = normalize_line("bind = SUPER, Q, killactive,   #   close  ");
        assert_eq!(line.semantic, "bind = SUPER, Q, killactive,");
        assert_eq!(line.comment, "close");
    }

    #[test]
    fn test_hash_inside_quotes_is_kept() {
        let line = normalize_line(r#"bind = SUPER, B, exec, notify-send "build #3" # notify"#);
        assert_eq!(line.semantic, r#"bind = SUPER, B, exec, notify-send "build #3""#);
        assert_eq!(line.comment, "notify");

        let line = normalize_line("exec = sh -c 'echo #not-a-comment'");
        assert_eq!(line.semantic, "exec = sh -c 'echo #not-a-comment'");
        assert!(line.comment.is_empty());
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let line = normalize_line(r#"exec = echo "a \" # b" # c"#);
        assert_eq!(line.semantic, r#"exec = echo "a \" # b""#);
        assert_eq!(line.comment, "c");
    }

    #[test]
    fn test_unterminated_apostrophe_is_not_a_quote() {
        let line = normalize_line("exec-once = notify-send don't # greet");
        assert_eq!(line.semantic, "exec-once = notify-send don't");
        assert_eq!(line.comment, "greet");
    }

    #[test]
    fn test_apostrophe_inside_word_before_quoted_hash() {
        let line = normalize_line("exec = echo it's a 'test #1'");
        assert_eq!(line.semantic, "exec = echo it's a 'test #1'");
        assert!(line.comment.is_empty());

        let line = normalize_line("exec = echo it's a 'test #1' # greet");
        assert_eq!(line.semantic, "exec = echo it's a 'test #1'");
        assert_eq!(line.comment, "greet");
    }

    #[test]
    fn test_double_hash_is_literal() {
        let line = normalize_line("col.active_border = ##ff0000 # red");
        assert_eq!(line.semantic, "col.active_border = #ff0000");
        assert_eq!(line.comment, "red");
    }

    #[test]
    fn test_line_without_comment() {
        let line = normalize_line("  kb_layout = us  ");
        assert_eq!(line.semantic, "kb_layout = us");
        assert_eq!(line.comment, "");
    }
}
