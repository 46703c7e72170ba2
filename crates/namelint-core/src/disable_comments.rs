//! Inline suppression through line comments
//!
//! ```js
//! // namelint-disable-next-line N002
//! const apiUrl = "x";
//! useEffect(() => {}); // namelint-disable-line hook-func-name
//! // namelint-disable-next-line N001, svg-file-name
//! ```
//!
//! Rules are referenced by id or name. A directive without references
//! suppresses every rule on its target line. Only `//` comments count.

use std::collections::HashMap;

const DISABLE_NEXT_LINE: &str = "namelint-disable-next-line";
const DISABLE_LINE: &str = "namelint-disable-line";

/// Which rules are suppressed on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suppression {
    All,
    Rules(Vec<String>),
}

impl Suppression {
    pub fn covers(&self, rule_ref: &str) -> bool {
        match self {
            Suppression::All => true,
            Suppression::Rules(rules) => rules.iter().any(|r| r == rule_ref),
        }
    }

    fn merge(&mut self, other: Suppression) {
        match other {
            Suppression::All => *self = Suppression::All,
            Suppression::Rules(more) => {
                if let Suppression::Rules(rules) = self {
                    for rule in more {
                        if !rules.contains(&rule) {
                            rules.push(rule);
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisableDirectives {
    by_line: HashMap<usize, Suppression>,
}

impl DisableDirectives {
    /// Builds directives from `//` comments given as (line, text after `//`).
    pub fn from_line_comments(comments: impl IntoIterator<Item = (usize, String)>) -> Self {
        let mut directives = Self::default();

        for (line, text) in comments {
            if let Some((target, suppression)) = parse_directive(line, text.trim()) {
                directives.suppress(target, suppression);
            }
        }

        directives
    }

    /// Suppressions for the same line are merged.
    pub fn suppress(&mut self, line: usize, suppression: Suppression) {
        match self.by_line.get_mut(&line) {
            Some(existing) => existing.merge(suppression),
            None => {
                self.by_line.insert(line, suppression);
            }
        }
    }

    pub fn is_disabled(&self, line: usize, rule_ref: &str) -> bool {
        self.by_line.get(&line).is_some_and(|s| s.covers(rule_ref))
    }

    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_line.len()
    }
}

/// Returns the target line and its suppression for a directive comment.
fn parse_directive(line: usize, comment: &str) -> Option<(usize, Suppression)> {
    if let Some(rest) = comment.strip_prefix(DISABLE_NEXT_LINE) {
        return parse_rule_refs(rest).map(|s| (line + 1, s));
    }
    let rest = comment.strip_prefix(DISABLE_LINE)?;
    parse_rule_refs(rest).map(|s| (line, s))
}

/// `None` when the keyword runs into more text, as in `namelint-disable-lines`.
fn parse_rule_refs(rest: &str) -> Option<Suppression> {
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let rules: Vec<String> = rest
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    Some(if rules.is_empty() {
        Suppression::All
    } else {
        Suppression::Rules(rules)
    })
}
