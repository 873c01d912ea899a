//! `road:` namespace: the SKOS degree taxonomy.
//!
//! Five degree bands partition the positive integers. [`BANDS`] is the one
//! table of band boundaries; both the concept scheme emitted here and
//! [`crate::classifier::classify`] read it.
//!
//! **Key invariant:** bands are ordered by ascending `min`, each band starts
//! one past the previous band's `max`, and only the last band is unbounded.

use crate::model::iris::*;
use crate::model::{Term, Triple};
use crate::namespaces::roadonto::{MAX_DEGREE, MIN_DEGREE};

/// IRI of the concept scheme resource.
pub const CONCEPT_SCHEME: &str = "http://example.org/roadnet/pa#ConceptScheme";

/// A contiguous range of total degree values mapped to one SKOS concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeBand {
    /// Stable token used as the concept's IRI fragment (e.g., `"DeadEnd"`).
    pub id: &'static str,
    /// English preferred label.
    pub label: &'static str,
    /// English definition.
    pub definition: &'static str,
    /// Inclusive lower bound.
    pub min: u64,
    /// Inclusive upper bound, or `None` for the open-ended top band.
    pub max: Option<u64>,
}

impl DegreeBand {
    /// Full IRI of this band's concept.
    #[must_use]
    pub fn iri(&self) -> String {
        format!("{ROAD}{}", self.id)
    }

    /// Returns true if `degree` falls within this band.
    #[must_use]
    pub fn contains(&self, degree: u64) -> bool {
        degree >= self.min && self.max.map_or(true, |max| degree <= max)
    }
}

/// The degree bands, narrowest connectivity first.
pub const BANDS: [DegreeBand; 5] = [
    DegreeBand {
        id: "DeadEnd",
        label: "Dead End",
        definition: "Node with only one connection",
        min: 1,
        max: Some(1),
    },
    DegreeBand {
        id: "SimpleJunction",
        label: "Simple Junction",
        definition: "Node with 2-3 connections",
        min: 2,
        max: Some(3),
    },
    DegreeBand {
        id: "Intersection",
        label: "Intersection",
        definition: "Node with 4-5 connections",
        min: 4,
        max: Some(5),
    },
    DegreeBand {
        id: "MajorHub",
        label: "Major Hub",
        definition: "Node with 6-10 connections",
        min: 6,
        max: Some(10),
    },
    DegreeBand {
        id: "SuperHub",
        label: "Super Hub",
        definition: "Node with more than 10 connections",
        min: 11,
        max: None,
    },
];

/// Looks up a band by its id token.
#[must_use]
pub fn band(id: &str) -> Option<&'static DegreeBand> {
    BANDS.iter().find(|b| b.id == id)
}

/// Emits the concept scheme, one concept per band, and the `skos:broader`
/// chain in which each band is broader-linked to the band before it.
#[must_use]
pub fn build() -> Vec<Triple> {
    let mut out = vec![
        Triple::new(CONCEPT_SCHEME, RDF_TYPE, Term::iri(SKOS_CONCEPT_SCHEME)),
        Triple::new(
            CONCEPT_SCHEME,
            SKOS_PREF_LABEL,
            Term::lang("Road Network Node Classification", "en"),
        ),
    ];

    for band in &BANDS {
        let concept = band.iri();
        out.push(Triple::new(&concept, RDF_TYPE, Term::iri(SKOS_CONCEPT)));
        out.push(Triple::new(&concept, SKOS_IN_SCHEME, Term::iri(CONCEPT_SCHEME)));
        out.push(Triple::new(&concept, SKOS_PREF_LABEL, Term::lang(band.label, "en")));
        out.push(Triple::new(
            &concept,
            SKOS_DEFINITION,
            Term::lang(band.definition, "en"),
        ));
        out.push(Triple::new(&concept, MIN_DEGREE, Term::integer(band.min)));
        if let Some(max) = band.max {
            out.push(Triple::new(&concept, MAX_DEGREE, Term::integer(max)));
        }
    }

    for pair in BANDS.windows(2) {
        out.push(Triple::new(
            pair[1].iri(),
            SKOS_BROADER,
            Term::iri(pair[0].iri()),
        ));
    }

    out
}
