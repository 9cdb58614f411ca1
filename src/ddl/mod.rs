// ddl/mod.rs
// Reformatting of single-line CREATE statements

pub mod prettify;
pub mod tokenizer;

pub use prettify::{prettify, prettify_tokens, CLAUSE_KEYWORDS};
pub use tokenizer::tokenize;
