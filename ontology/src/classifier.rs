//! Degree classification against the SKOS band table.

use crate::namespaces::road::{DegreeBand, BANDS};

/// Returns the band whose range contains `degree`, or `None` for degree 0.
///
/// Bands are disjoint, so at most one matches.
#[must_use]
pub fn classify(degree: u64) -> Option<&'static DegreeBand> {
    BANDS.iter().find(|band| band.contains(degree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_unclassified() {
        assert!(classify(0).is_none());
    }

    #[test]
    fn band_edges() {
        let cases = [
            (1, "DeadEnd"),
            (2, "SimpleJunction"),
            (3, "SimpleJunction"),
            (4, "Intersection"),
            (5, "Intersection"),
            (6, "MajorHub"),
            (10, "MajorHub"),
            (11, "SuperHub"),
            (u64::MAX, "SuperHub"),
        ];
        for (degree, expected) in cases {
            assert_eq!(classify(degree).map(|b| b.id), Some(expected), "degree {degree}");
        }
    }

    proptest! {
        #[test]
        fn every_positive_degree_hits_exactly_one_band(degree in 1u64..10_000) {
            let hits = BANDS.iter().filter(|b| b.contains(degree)).count();
            prop_assert_eq!(hits, 1);
            prop_assert!(classify(degree).is_some());
        }

        #[test]
        fn classification_is_monotone(a in 1u64..1_000, b in 1u64..1_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let rank = |d: u64| BANDS.iter().position(|band| band.contains(d));
            prop_assert!(rank(lo) <= rank(hi));
        }
    }
}
