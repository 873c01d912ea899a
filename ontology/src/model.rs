//! Core RDF model types.
//!
//! Statements are plain owned data: an IRI subject, an IRI predicate and an
//! object [`Term`]. They accumulate in a [`TripleSet`], which collapses
//! duplicates and keeps a deterministic order so that serializations of the
//! same graph are byte-identical across runs.

use std::collections::BTreeSet;
use std::fmt;

/// The lexical form and annotation of an RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Lexical form, unescaped.
    pub lexical: String,
    /// Language tag or datatype.
    pub kind: LiteralKind,
}

/// How a literal is annotated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LiteralKind {
    /// A simple literal (implicitly `xsd:string`).
    Plain,
    /// A language-tagged string, e.g. `"Dead End"@en`.
    Lang(String),
    /// A typed literal; holds the full datatype IRI.
    Typed(String),
}

/// The object position of a statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// An IRI reference (full IRI, no angle brackets).
    Iri(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// An IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// A simple string literal.
    pub fn plain(value: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: value.into(),
            kind: LiteralKind::Plain,
        })
    }

    /// A language-tagged string literal.
    pub fn lang(value: impl Into<String>, tag: impl Into<String>) -> Self {
        Term::Literal(Literal {
            lexical: value.into(),
            kind: LiteralKind::Lang(tag.into()),
        })
    }

    /// An `xsd:integer` literal.
    pub fn integer(value: u64) -> Self {
        Term::Literal(Literal {
            lexical: value.to_string(),
            kind: LiteralKind::Typed(iris::XSD_INTEGER.to_owned()),
        })
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    /// Returns the integer value of an `xsd:integer` literal.
    #[must_use]
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Term::Literal(Literal {
                lexical,
                kind: LiteralKind::Typed(dt),
            }) if dt == iris::XSD_INTEGER => lexical.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Literal(lit) => match &lit.kind {
                LiteralKind::Plain => write!(f, "{:?}", lit.lexical),
                LiteralKind::Lang(tag) => write!(f, "{:?}@{tag}", lit.lexical),
                LiteralKind::Typed(dt) => write!(f, "{:?}^^<{dt}>", lit.lexical),
            },
        }
    }
}

/// A single RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Full IRI of the subject.
    pub subject: String,
    /// Full IRI of the predicate.
    pub predicate: String,
    /// Object term.
    pub object: Term,
}

impl Triple {
    /// Builds a statement from its three parts.
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// A namespace prefix binding used to shorten IRIs on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    /// The short name (e.g., `"road"`).
    pub name: &'static str,
    /// The namespace IRI the name expands to.
    pub iri: &'static str,
}

/// A set of RDF statements with namespace bindings.
///
/// Inserting a statement that is already present is a no-op, so the ontology
/// and taxonomy builders can safely run more than once.
#[derive(Debug, Clone, Default)]
pub struct TripleSet {
    triples: BTreeSet<Triple>,
    prefixes: Vec<Prefix>,
}

impl TripleSet {
    /// Creates an empty set with no prefix bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with the standard road network bindings
    /// (`road`, `roadonto`, `skos`, `owl`, `rdf`, `rdfs`, `xsd`).
    #[must_use]
    pub fn with_default_prefixes() -> Self {
        let mut set = Self::new();
        for prefix in iris::DEFAULT_PREFIXES {
            set.bind(prefix.name, prefix.iri);
        }
        set
    }

    /// Binds `name` to `iri`, replacing an earlier binding of the same name.
    pub fn bind(&mut self, name: &'static str, iri: &'static str) {
        self.prefixes.retain(|p| p.name != name);
        self.prefixes.push(Prefix { name, iri });
    }

    /// Returns the prefix bindings in binding order.
    #[must_use]
    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    /// Adds a statement. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Returns true if the statement is present.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Number of distinct statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if there are no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates statements in subject, predicate, object order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Iterates the objects of all statements matching `subject` and `predicate`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }
}

impl Extend<Triple> for TripleSet {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl PartialEq for TripleSet {
    fn eq(&self, other: &Self) -> bool {
        self.triples == other.triples
    }
}

impl Eq for TripleSet {}

/// Whether a property relates two resources or a resource and a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:DatatypeProperty`: relates a resource to an XSD literal.
    Datatype,
    /// `owl:ObjectProperty`: relates two resources.
    Object,
}

/// An OWL class declaration.
#[derive(Debug, Clone)]
pub struct Class {
    /// Full IRI.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Optional description.
    pub comment: Option<&'static str>,
}

/// An OWL property declaration.
#[derive(Debug, Clone)]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Datatype or object property.
    pub kind: PropertyKind,
    /// Optional human-readable label.
    pub label: Option<&'static str>,
    /// Full IRI of the domain class.
    pub domain: &'static str,
    /// Full IRI of the range class or XSD datatype.
    pub range: &'static str,
}

/// Standard IRI constants.
pub mod iris {
    use super::Prefix;

    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// SKOS namespace.
    pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

    /// Data namespace: node resources, the concept scheme and its concepts.
    pub const ROAD: &str = "http://example.org/roadnet/pa#";
    /// Schema namespace: classes and properties.
    pub const ROAD_ONTO: &str = "http://example.org/roadnet/ontology#";

    // Vocabulary terms
    /// `rdf:type`
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:label`
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:domain`
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `owl:Ontology`
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:Class`
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `xsd:integer`
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `skos:ConceptScheme`
    pub const SKOS_CONCEPT_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#ConceptScheme";
    /// `skos:Concept`
    pub const SKOS_CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
    /// `skos:inScheme`
    pub const SKOS_IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";
    /// `skos:prefLabel`
    pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    /// `skos:definition`
    pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
    /// `skos:broader`
    pub const SKOS_BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";

    /// Prefixes bound on every serialized road network graph.
    pub const DEFAULT_PREFIXES: &[Prefix] = &[
        Prefix { name: "road", iri: ROAD },
        Prefix { name: "roadonto", iri: ROAD_ONTO },
        Prefix { name: "skos", iri: SKOS },
        Prefix { name: "owl", iri: OWL },
        Prefix { name: "rdf", iri: RDF },
        Prefix { name: "rdfs", iri: RDFS },
        Prefix { name: "xsd", iri: XSD },
    ];
}
