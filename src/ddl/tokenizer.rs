// ddl/tokenizer.rs
// Splits a raw statement into whitespace-delimited fields

/// Returns the fields of `statement` in order. Runs of whitespace act as a
/// single separator and no empty field is ever produced.
pub fn tokenize(statement: &str) -> Vec<&str> {
    statement.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        let tokens = tokenize("CREATE   TABLE\tdb.t\n(id UInt64)");
        assert_eq!(tokens, vec!["CREATE", "TABLE", "db.t", "(id", "UInt64)"]);
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn keeps_field_contents_untouched() {
        let tokens = tokenize(r"DEFAULT 'a\'b', x");
        assert_eq!(tokens, vec!["DEFAULT", r"'a\'b',", "x"]);
    }
}
