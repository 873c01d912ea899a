//! N-Triples serializer.
//!
//! One statement per line with absolute IRIs. Suitable for bulk loading and
//! line-oriented diffing.

use std::io::{self, Write};

use super::escape_string;
use crate::model::{LiteralKind, Term, Triple, TripleSet};

/// Writes `set` as N-Triples.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_ntriples<W: Write>(set: &TripleSet, mut out: W) -> io::Result<()> {
    for triple in set.iter() {
        writeln!(out, "{}", ntriples_line(triple))?;
    }
    out.flush()
}

/// Serializes `set` to an N-Triples string.
#[must_use]
pub fn to_ntriples(set: &TripleSet) -> String {
    let mut out = String::with_capacity(set.len() * 96);
    for triple in set.iter() {
        out.push_str(&ntriples_line(triple));
        out.push('\n');
    }
    out
}

/// Formats a single statement, including the terminating ` .`.
#[must_use]
pub fn ntriples_line(triple: &Triple) -> String {
    format!(
        "<{}> <{}> {} .",
        triple.subject,
        triple.predicate,
        object(&triple.object)
    )
}

fn object(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::Literal(lit) => {
            let lexical = escape_string(&lit.lexical);
            match &lit.kind {
                LiteralKind::Plain => format!("\"{lexical}\""),
                LiteralKind::Lang(tag) => format!("\"{lexical}\"@{tag}"),
                LiteralKind::Typed(dt) => format!("\"{lexical}\"^^<{dt}>"),
            }
        }
    }
}
