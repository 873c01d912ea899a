//! Turtle 1.1 serializer.
//!
//! Statements are grouped by subject (`;`) and by predicate (`,`). IRIs under
//! a bound namespace are written as prefixed names when the local part is a
//! plain identifier; `rdf:type` is written as `a`; `xsd:integer` literals are
//! written bare.

use std::convert::Infallible;
use std::io::{self, Write};

use super::escape_string;
use crate::model::iris::{RDF_TYPE, XSD_INTEGER};
use crate::model::{LiteralKind, Prefix, Term, TripleSet};

/// Writes `set` as a Turtle document.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_turtle<W: Write>(set: &TripleSet, mut out: W) -> io::Result<()> {
    render(set, |chunk| out.write_all(chunk.as_bytes()))?;
    out.flush()
}

/// Serializes `set` to a Turtle string.
#[must_use]
pub fn to_turtle(set: &TripleSet) -> String {
    let mut out = String::with_capacity(set.len() * 48);
    let Ok(()) = render::<Infallible, _>(set, |chunk| {
        out.push_str(chunk);
        Ok(())
    });
    out
}

/// Walks `set` in order, handing each piece of the document to `sink`.
fn render<E, F>(set: &TripleSet, mut sink: F) -> Result<(), E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    let prefixes = set.prefixes();
    for prefix in prefixes {
        sink(&format!("@prefix {}: <{}> .\n", prefix.name, prefix.iri))?;
    }

    let mut current_subject: Option<&str> = None;
    let mut current_predicate: Option<&str> = None;

    for triple in set.iter() {
        let object = object(&triple.object, prefixes);
        if current_subject == Some(triple.subject.as_str()) {
            if current_predicate == Some(triple.predicate.as_str()) {
                sink(&format!(",\n        {object}"))?;
            } else {
                sink(&format!(
                    " ;\n    {} {object}",
                    predicate(&triple.predicate, prefixes)
                ))?;
            }
        } else {
            if current_subject.is_some() {
                sink(" .\n")?;
            }
            sink(&format!(
                "\n{} {} {object}",
                iri(&triple.subject, prefixes),
                predicate(&triple.predicate, prefixes)
            ))?;
            current_subject = Some(triple.subject.as_str());
        }
        current_predicate = Some(triple.predicate.as_str());
    }

    if current_subject.is_some() {
        sink(" .\n")?;
    }
    Ok(())
}

fn predicate(iri_str: &str, prefixes: &[Prefix]) -> String {
    if iri_str == RDF_TYPE {
        "a".to_owned()
    } else {
        iri(iri_str, prefixes)
    }
}

fn iri(iri: &str, prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .filter_map(|p| Some((p, iri.strip_prefix(p.iri)?)))
        .filter(|(_, local)| is_plain_local(local))
        .max_by_key(|(p, _)| p.iri.len())
        .map_or_else(|| format!("<{iri}>"), |(p, local)| format!("{}:{local}", p.name))
}

/// A conservative subset of Turtle's `PN_LOCAL`: ASCII letters, digits and
/// underscores. The empty local name is allowed (`roadonto:`).
fn is_plain_local(local: &str) -> bool {
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn object(term: &Term, prefixes: &[Prefix]) -> String {
    match term {
        Term::Iri(i) => iri(i, prefixes),
        Term::Literal(lit) => match &lit.kind {
            LiteralKind::Typed(dt)
                if dt == XSD_INTEGER
                    && !lit.lexical.is_empty()
                    && lit.lexical.bytes().all(|b| b.is_ascii_digit()) =>
            {
                lit.lexical.clone()
            }
            LiteralKind::Typed(dt) => {
                format!("\"{}\"^^{}", escape_string(&lit.lexical), iri(dt, prefixes))
            }
            LiteralKind::Lang(tag) => format!("\"{}\"@{tag}", escape_string(&lit.lexical)),
            LiteralKind::Plain => format!("\"{}\"", escape_string(&lit.lexical)),
        },
    }
}
