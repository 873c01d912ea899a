//! Conformance report types: results, severity levels, and report aggregation.

use std::fmt;

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check identified a warning (non-blocking).
    Warning,
    /// The check failed (blocks conformance).
    Failure,
}

impl Severity {
    /// Short tag used in printed reports.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// A single conformance check result.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Validator that produced this result (e.g., `"ontology/rdf"`).
    pub validator: &'static str,
    /// Human-readable outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Offending items, at most [`MAX_DETAILS`] of them.
    pub details: Vec<String>,
}

/// Cap on detail lines kept per result; large graphs can produce millions.
pub const MAX_DETAILS: usize = 10;

impl TestResult {
    /// Creates a passing result.
    pub fn pass(validator: &'static str, message: impl Into<String>) -> Self {
        Self {
            validator,
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a failure result.
    pub fn fail(validator: &'static str, message: impl Into<String>) -> Self {
        Self::fail_with_details(validator, message, Vec::new())
    }

    /// Creates a failure result; `details` is truncated to [`MAX_DETAILS`].
    pub fn fail_with_details(
        validator: &'static str,
        message: impl Into<String>,
        mut details: Vec<String>,
    ) -> Self {
        details.truncate(MAX_DETAILS);
        Self {
            validator,
            message: message.into(),
            severity: Severity::Failure,
            details,
        }
    }

    /// Creates a warning result.
    pub fn warn(validator: &'static str, message: impl Into<String>) -> Self {
        Self {
            validator,
            message: message.into(),
            severity: Severity::Warning,
            details: Vec::new(),
        }
    }

    /// Pass if `violations` is empty, otherwise a failure listing them.
    pub fn from_violations(
        validator: &'static str,
        ok: impl Into<String>,
        failed: impl Into<String>,
        violations: Vec<String>,
    ) -> Self {
        if violations.is_empty() {
            Self::pass(validator, ok)
        } else {
            let count = violations.len();
            Self::fail_with_details(
                validator,
                format!("{} ({count} violations)", failed.into()),
                violations,
            )
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity.tag(), self.validator, self.message)?;
        for detail in &self.details {
            write!(f, "\n       {detail}")?;
        }
        Ok(())
    }
}

/// Aggregated conformance report from all validators.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// All individual results in the order they were produced.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
