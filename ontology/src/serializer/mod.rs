//! Serializers for road network statement sets.
//!
//! Two formats are written for every run, both holding the same set:
//! - **Turtle** ([`turtle`]): prefixed, grouped by subject, `roadnet_complete.ttl`
//! - **N-Triples** ([`ntriples`]): one absolute triple per line, `roadnet_complete.nt`
//!
//! Both walk the [`crate::TripleSet`] in its sorted order, so output is
//! byte-identical for identical sets.

pub mod ntriples;
pub mod turtle;

/// Escapes a lexical form for a double-quoted Turtle or N-Triples string.
pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_string;

    #[test]
    fn escapes_quotes_backslashes_and_controls() {
        assert_eq!(escape_string(r#"a "b" \c"#), r#"a \"b\" \\c"#);
        assert_eq!(escape_string("line\nnext\ttab"), "line\\nnext\\ttab");
        assert_eq!(escape_string("Dead End"), "Dead End");
    }
}
