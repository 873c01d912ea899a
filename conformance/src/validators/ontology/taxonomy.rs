//! Degree band table validator.
//!
//! The bands must partition the positive integers: the first starts at 1,
//! each starts one past the previous maximum, only the last is unbounded,
//! and [`roadnet_ontology::classify`] must agree with every band's bounds.

use roadnet_ontology::{classify, DegreeBand, BANDS};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/taxonomy";

/// Validates the live band table and classifier.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(check_partition(&BANDS));
    report.push(check_classifier(&BANDS));
    report
}

/// Checks that `bands` are contiguous from 1 with only the last unbounded.
#[must_use]
pub fn check_partition(bands: &[DegreeBand]) -> TestResult {
    let mut violations = Vec::new();

    match bands.first() {
        Some(first) if first.min != 1 => {
            violations.push(format!("{} starts at {}, not 1", first.id, first.min));
        }
        None => violations.push("band table is empty".to_owned()),
        Some(_) => {}
    }

    for pair in bands.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        match lower.max {
            None => violations.push(format!("{} is unbounded but not last", lower.id)),
            Some(max) if max.checked_add(1) != Some(upper.min) => violations.push(format!(
                "{} ends at {max} but {} starts at {}",
                lower.id, upper.id, upper.min
            )),
            Some(_) => {}
        }
    }

    for band in bands {
        if band.max.is_some_and(|max| max < band.min) {
            violations.push(format!("{} is empty", band.id));
        }
    }

    if let Some(last) = bands.last() {
        if last.max.is_some() {
            violations.push(format!("last band {} is bounded", last.id));
        }
    }

    TestResult::from_violations(
        VALIDATOR,
        format!("{} bands partition the positive degrees", bands.len()),
        "Degree bands do not partition the positive integers",
        violations,
    )
}

/// Checks [`classify`] at both edges of every band and at degree 0.
#[must_use]
pub fn check_classifier(bands: &[DegreeBand]) -> TestResult {
    let mut violations = Vec::new();

    if let Some(b) = classify(0) {
        violations.push(format!("degree 0 classified as {}", b.id));
    }

    for band in bands {
        let mut samples = vec![band.min];
        samples.extend(band.max);
        if band.max.is_none() {
            samples.push(band.min.saturating_mul(10));
        }
        for degree in samples {
            let got = classify(degree).map(|b| b.id);
            if got != Some(band.id) {
                violations.push(format!("degree {degree}: expected {}, got {got:?}", band.id));
            }
        }
    }

    TestResult::from_violations(
        VALIDATOR,
        "Classifier agrees with every band boundary",
        "Classifier disagrees with the band table",
        violations,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_bands_pass() {
        let report = validate();
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn gap_is_reported() {
        let mut bands = BANDS;
        bands[1].min = 3;
        let result = check_partition(&bands);
        assert!(result.is_failure());
        assert!(result.details[0].contains("DeadEnd ends at 1"));
    }

    #[test]
    fn bounded_last_band_is_reported() {
        let mut bands = BANDS;
        bands[4].max = Some(100);
        assert!(check_partition(&bands).is_failure());
    }

    #[test]
    fn classifier_mismatch_is_reported() {
        // Shifted table: classify still reads the live bands.
        let mut bands = BANDS;
        bands[0].max = Some(2);
        bands[1].min = 3;
        assert!(check_classifier(&bands).is_failure());
    }
}
