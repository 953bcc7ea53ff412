//! Gitignore-style glob compilation.
//!
//! A [`Pattern`] is compiled once, at construction, into a fully anchored
//! regex over a relative path that uses `/` separators. Translation is a
//! single left-to-right pass over the pattern's characters:
//!
//! | Glob          | Meaning                                        |
//! |---------------|------------------------------------------------|
//! | `*`           | any run of characters except `/`               |
//! | `**/`         | zero or more whole path segments               |
//! | `**`          | any run of characters, separators included     |
//! | `?`           | exactly one character except `/`               |
//! | `[...]`       | character class, `[!...]` negates              |
//! | `\c`          | the character `c`, literally                   |
//!
//! Patterns without a separator (after the trailing one is removed) match at
//! any depth. Patterns with one are anchored: a wildcard-bearing or
//! `/`-rooted pattern matches from the start of the path, while a plain
//! literal path such as `components/ui` matches at any segment boundary. A
//! trailing `/` marks a directory pattern, which also matches everything
//! beneath the named path.

use regex::Regex;
use tracing::warn;

/// A compiled ignore pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    directory: bool,
    anchored: bool,
    matcher: Option<Regex>,
}

impl Pattern {
    /// Compile a pattern.
    ///
    /// Never fails: a pattern whose translation is not a valid regex (for
    /// example a reversed range such as `[z-a]`) is logged and matches nothing.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let directory = text.ends_with('/');
        let body = text.trim_end_matches('/');
        let (body, rooted) = match body.strip_prefix('/') {
            Some(rest) => (rest, true),
            None => (body, false),
        };
        let anchored = rooted || body.contains('/');
        let floating = !rooted && (!anchored || is_literal(body));

        let matcher = if body.is_empty() {
            None
        } else {
            let source = translate(body, floating, directory);
            match Regex::new(&source) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    warn!(pattern = %text, error = %e, "Malformed ignore pattern will match nothing");
                    None
                }
            }
        };

        Self {
            text,
            directory,
            anchored,
            matcher,
        }
    }

    /// The pattern text as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the pattern ends with a separator.
    pub fn is_directory(&self) -> bool {
        self.directory
    }

    /// Whether the pattern is matched from the start of the path rather than
    /// at any depth.
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Whether the pattern compiled to a usable matcher.
    pub fn is_valid(&self) -> bool {
        self.matcher.is_some()
    }

    /// Test a relative path against this pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.as_ref().is_some_and(|re| re.is_match(path))
    }
}

/// Test `path` against `pattern`.
pub fn matches(path: &str, pattern: &Pattern) -> bool {
    pattern.matches(path)
}

/// A pattern with no glob metacharacters or escapes.
fn is_literal(body: &str) -> bool {
    !body.contains(['*', '?', '[', '\\'])
}

fn translate(body: &str, floating: bool, directory: bool) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut regex = String::with_capacity(body.len() * 2 + 16);
    regex.push_str("(?s)^");
    if floating {
        regex.push_str("(?:.*/)?");
    }

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                let mut end = i + 2;
                while chars.get(end) == Some(&'*') {
                    end += 1;
                }
                if chars.get(end) == Some(&'/') {
                    regex.push_str("(?:.*/)?");
                    i = end + 1;
                } else {
                    regex.push_str(".*");
                    i = end;
                }
            }
            '*' => {
                regex.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                regex.push_str("[^/]");
                i += 1;
            }
            '[' => match translate_class(&chars[i..]) {
                Some((class, consumed)) => {
                    regex.push_str(&class);
                    i += consumed;
                }
                None => {
                    push_literal(&mut regex, '[');
                    i += 1;
                }
            },
            '\\' => match chars.get(i + 1) {
                Some(&next) => {
                    push_literal(&mut regex, next);
                    i += 2;
                }
                None => {
                    push_literal(&mut regex, '\\');
                    i += 1;
                }
            },
            c => {
                push_literal(&mut regex, c);
                i += 1;
            }
        }
    }

    if directory {
        regex.push_str("(?:/.*)?");
    }
    regex.push('$');
    regex
}

/// Translate a bracket expression starting at `chars[0] == '['`.
///
/// Returns the regex class and the number of glob characters consumed, or
/// `None` when the class is unterminated.
fn translate_class(chars: &[char]) -> Option<(String, usize)> {
    let mut i = 1;
    let negated = chars.get(i) == Some(&'!');
    if negated {
        i += 1;
    }
    let start = i;
    // A `]` right after the opening bracket is a member, not the terminator.
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    while i < chars.len() && chars[i] != ']' {
        i += 1;
    }
    if i >= chars.len() {
        return None;
    }

    let members = &chars[start..i];
    let mut class = String::from(if negated { "[^/" } else { "[" });
    let mut k = 0;
    while k < members.len() {
        if k + 2 < members.len() && members[k + 1] == '-' {
            push_class_member(&mut class, members[k]);
            class.push('-');
            push_class_member(&mut class, members[k + 2]);
            k += 3;
        } else {
            push_class_member(&mut class, members[k]);
            k += 1;
        }
    }
    class.push(']');

    Some((class, i + 1))
}

fn push_class_member(class: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '^' | '&' | '~' | '-') {
        class.push('\\');
    }
    class.push(c);
}

fn push_literal(regex: &mut String, c: char) {
    let mut buf = [0u8; 4];
    regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}
