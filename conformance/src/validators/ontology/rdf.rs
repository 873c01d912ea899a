//! RDF 1.1 / Turtle 1.1 validator.
//!
//! Re-parses the written artifacts with a real RDF parser:
//! - the Turtle file parses without errors
//! - the N-Triples file parses without errors
//! - both files hold exactly the same set of statements
//!
//! Parsed statements are mapped back into [`roadnet_ontology::Triple`] values
//! so that sets can be compared with what the converter emitted.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use roadnet_ontology::model::iris::XSD;
use roadnet_ontology::pipeline::{NTRIPLES_FILE, TURTLE_FILE};
use roadnet_ontology::{Literal, LiteralKind, Term, Triple, TripleSet};
use sophia_api::source::TripleSource;
use sophia_api::term::{Term as _, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::{nt, turtle};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/rdf";

/// Validates the Turtle and N-Triples artifacts in `artifacts`.
///
/// Also returns the statements parsed from the Turtle file, if it parsed, so
/// instance checks can run without parsing it again.
///
/// # Errors
///
/// Returns an error if an artifact exists but cannot be read. Parse errors
/// are reported as failures, not returned.
pub fn validate(artifacts: &Path) -> Result<(ConformanceReport, Option<TripleSet>)> {
    let mut report = ConformanceReport::new();

    let from_turtle = load(artifacts, TURTLE_FILE, parse_turtle, &mut report)?;
    let from_ntriples = load(artifacts, NTRIPLES_FILE, parse_ntriples, &mut report)?;

    if let (Some(ttl), Some(nt)) = (&from_turtle, &from_ntriples) {
        report.push(compare_sets(ttl, nt));
    }

    Ok((report, from_turtle))
}

/// Reads and parses one artifact, recording the outcome.
fn load(
    artifacts: &Path,
    file: &str,
    parse: fn(&str) -> Result<TripleSet>,
    report: &mut ConformanceReport,
) -> Result<Option<TripleSet>> {
    let path = artifacts.join(file);
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{file} not found in artifacts directory"),
        ));
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match parse(&content) {
        Ok(set) if set.is_empty() => {
            report.push(TestResult::fail(VALIDATOR, format!("{file} holds no triples")));
            Ok(None)
        }
        Ok(set) => {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{file} parses ({} distinct triples)", set.len()),
            ));
            Ok(Some(set))
        }
        Err(e) => {
            report.push(TestResult::fail(VALIDATOR, format!("{file} does not parse: {e:#}")));
            Ok(None)
        }
    }
}

/// Checks that two parsed artifacts hold the same statements.
#[must_use]
pub fn compare_sets(turtle: &TripleSet, ntriples: &TripleSet) -> TestResult {
    let mut violations: Vec<String> = turtle
        .iter()
        .filter(|t| !ntriples.contains(t))
        .map(|t| format!("only in Turtle: <{}> <{}> {}", t.subject, t.predicate, t.object))
        .collect();
    violations.extend(
        ntriples
            .iter()
            .filter(|t| !turtle.contains(t))
            .map(|t| format!("only in N-Triples: <{}> <{}> {}", t.subject, t.predicate, t.object)),
    );
    TestResult::from_violations(
        VALIDATOR,
        format!("Turtle and N-Triples hold the same {} triples", turtle.len()),
        "Turtle and N-Triples disagree",
        violations,
    )
}

/// Parses a Turtle document into a statement set.
///
/// # Errors
///
/// Returns an error on a syntax error or on blank nodes, which the road
/// network vocabulary never produces.
pub fn parse_turtle(content: &str) -> Result<TripleSet> {
    collect(turtle::parse_str(content)).context("invalid Turtle")
}

/// Parses an N-Triples document into a statement set.
///
/// # Errors
///
/// Same as [`parse_turtle`].
pub fn parse_ntriples(content: &str) -> Result<TripleSet> {
    collect(nt::parse_str(content)).context("invalid N-Triples")
}

fn collect<S: TripleSource>(mut source: S) -> Result<TripleSet> {
    let mut set = TripleSet::new();
    let mut first_error: Option<anyhow::Error> = None;

    source
        .for_each_triple(|t| {
            if first_error.is_some() {
                return;
            }
            match convert(t.s(), t.p(), t.o()) {
                Ok(triple) => {
                    set.insert(triple);
                }
                Err(e) => first_error = Some(e),
            }
        })
        .map_err(|e| anyhow!("{e}"))?;

    match first_error {
        Some(e) => Err(e),
        None => Ok(set),
    }
}

fn convert<S, P, O>(s: S, p: P, o: O) -> Result<Triple>
where
    S: sophia_api::term::Term,
    P: sophia_api::term::Term,
    O: sophia_api::term::Term,
{
    let subject = iri_of(&s).context("subject")?;
    let predicate = iri_of(&p).context("predicate")?;
    let object = match o.kind() {
        TermKind::Iri => Term::Iri(iri_of(&o)?),
        TermKind::Literal => Term::Literal(literal_of(&o)?),
        other => bail!("unsupported object term kind {other:?}"),
    };
    Ok(Triple::new(subject, predicate, object))
}

fn iri_of<T: sophia_api::term::Term>(term: &T) -> Result<String> {
    match term.iri() {
        Some(iri) => Ok(iri.as_str().to_owned()),
        None => bail!("expected an IRI, found {:?}", term.kind()),
    }
}

fn literal_of<T: sophia_api::term::Term>(term: &T) -> Result<Literal> {
    let lexical = term
        .lexical_form()
        .ok_or_else(|| anyhow!("literal without lexical form"))?;
    let lexical: &str = &lexical;

    let kind = if let Some(tag) = term.language_tag() {
        LiteralKind::Lang(tag.as_str().to_owned())
    } else {
        let datatype = term
            .datatype()
            .ok_or_else(|| anyhow!("literal without datatype"))?;
        match datatype.as_str().strip_prefix(XSD) {
            Some("string") => LiteralKind::Plain,
            _ => LiteralKind::Typed(datatype.as_str().to_owned()),
        }
    };

    Ok(Literal {
        lexical: lexical.to_owned(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadnet_ontology::model::iris::RDFS_LABEL;
    use roadnet_ontology::schema_statements;
    use roadnet_ontology::serializer::{ntriples, turtle as ttl};

    #[test]
    fn schema_round_trips_through_turtle() {
        let set = schema_statements();
        let parsed = parse_turtle(&ttl::to_turtle(&set)).expect("Turtle parses");
        assert_eq!(parsed, set);
    }

    #[test]
    fn schema_round_trips_through_ntriples() {
        let set = schema_statements();
        let parsed = parse_ntriples(&ntriples::to_ntriples(&set)).expect("N-Triples parses");
        assert_eq!(parsed, set);
    }

    #[test]
    fn escaped_literals_round_trip() {
        let mut set = TripleSet::with_default_prefixes();
        set.insert(Triple::new(
            "http://example.org/roadnet/pa#node_1",
            RDFS_LABEL,
            Term::plain("a \"quoted\"\\ name\nwith a newline"),
        ));
        assert_eq!(parse_turtle(&ttl::to_turtle(&set)).expect("parses"), set);
        assert_eq!(parse_ntriples(&ntriples::to_ntriples(&set)).expect("parses"), set);
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(parse_turtle("road:node_1 a .").is_err());
        assert!(parse_ntriples("<http://a> <http://b> .\n").is_err());
    }

    #[test]
    fn blank_nodes_are_rejected() {
        assert!(parse_turtle("_:b <http://a> <http://b> .").is_err());
    }

    #[test]
    fn disagreement_is_a_failure() {
        let a = schema_statements();
        let mut b = a.clone();
        b.insert(Triple::new("http://x", RDFS_LABEL, Term::plain("extra")));
        let result = compare_sets(&a, &b);
        assert!(result.is_failure());
        assert_eq!(result.details.len(), 1);
    }
}
