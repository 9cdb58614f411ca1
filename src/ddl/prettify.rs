// ddl/prettify.rs
// Single-pass reformatter turning a flat CREATE TABLE statement into an
// indented, multi-line rendering.

use super::tokenizer::tokenize;

/// Keywords that start a new top-level clause on a fresh line.
pub const CLAUSE_KEYWORDS: [&str; 7] = [
    "ORDER",
    "ENGINE",
    "PARTITION",
    "SETTINGS",
    "FROM",
    "SELECT",
    "GROUP",
];

const ORDER_KEYWORD: &str = "ORDER";

/// Per-statement formatter state. Built fresh for every statement and
/// consumed by `finish`.
#[derive(Debug, Default)]
struct FormatterState {
    /// Open column-definition lists. Only ever 0 or 1.
    depth: u8,
    /// Latched once `ORDER` is seen, never reset.
    after_order_by: bool,
    output: String,
}

impl FormatterState {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn step(&mut self, token: &str) {
        if let Some(rest) = token.strip_prefix('(') {
            if self.depth == 0 && !self.after_order_by {
                self.open_list(rest);
            } else {
                self.write_default(token);
            }
        } else if let Some(rest) = token.strip_suffix(')') {
            if self.depth == 1 {
                self.close_list(rest);
            } else {
                self.write_default(token);
            }
        } else if CLAUSE_KEYWORDS.contains(&token) {
            self.write_clause(token);
        } else if token.ends_with(',') && !self.after_order_by {
            self.output.push_str(token);
            self.output.push_str("\n\t\t");
        } else {
            self.write_default(token);
        }
    }

    fn open_list(&mut self, rest: &str) {
        self.output.push_str("\n\t(\n\t\t");
        self.output.push_str(rest);
        self.output.push(' ');
        self.depth += 1;
    }

    fn close_list(&mut self, rest: &str) {
        self.output.push_str(rest);
        self.output.push_str("\n\t)");
        self.depth -= 1;
    }

    fn write_clause(&mut self, keyword: &str) {
        self.output.push('\n');
        self.output.push_str(keyword);
        self.output.push(' ');
        if keyword == ORDER_KEYWORD {
            self.after_order_by = true;
        }
    }

    fn write_default(&mut self, token: &str) {
        self.output.push_str(token);
        self.output.push(' ');
    }

    fn finish(self) -> String {
        self.output
    }
}

/// Reformats an already tokenized statement. Never fails: tokens that do not
/// fit the expected CREATE TABLE shape are written out separated by spaces.
pub fn prettify_tokens(tokens: &[&str]) -> String {
    let capacity = tokens.iter().map(|t| t.len() + 4).sum();
    let mut state = FormatterState::with_capacity(capacity);
    for token in tokens {
        state.step(token);
    }
    state.finish()
}

/// Tokenizes `statement` and reformats it.
pub fn prettify(statement: &str) -> String {
    prettify_tokens(&tokenize(statement))
}
