//! Diagnostics collected while checking historical datasets.
//!
//! Loading a dataset should report every problem at once rather than stop at
//! the first one, so checks push [`DiagnosticIssue`]s into a [`Diagnostics`]
//! container. Errors mark invariant violations that prevent building a
//! [`HistoricalSeries`](crate::HistoricalSeries); warnings flag suspicious but
//! usable values.
//!
//! # Example
//!
//! ```
//! use ecast_core::diagnostics::Diagnostics;
//! use ecast_core::Field;
//!
//! let mut diag = Diagnostics::new();
//! diag.add_warning("range", "renewable share above 100%");
//! diag.add_error_for_year("sequence", "duplicate year", 2004);
//! diag.add_warning_for_field("value", "negative value", 2005, Field::Gdp);
//!
//! assert_eq!(diag.warning_count(), 2);
//! assert_eq!(diag.error_count(), 1);
//! ```

use serde::Serialize;

use crate::field::Field;
use crate::record::EnergyRecord;

/// Severity level for diagnostic issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious value, dataset still usable
    Warning,
    /// Invariant violation, dataset rejected
    Error,
}

/// A single diagnostic issue
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticIssue {
    pub severity: Severity,
    /// Category for grouping (e.g., "sequence", "value", "range")
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
}

impl DiagnosticIssue {
    pub fn new(
        severity: Severity,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category: category.into(),
            message: message.into(),
            year: None,
            field: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }
}

impl std::fmt::Display for DiagnosticIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };

        write!(f, "[{}:{}] {}", severity, self.category, self.message)?;

        if let Some(field) = self.field {
            write!(f, " ({})", field)?;
        }
        if let Some(year) = self.year {
            write!(f, " in {}", year)?;
        }

        Ok(())
    }
}

/// Collection of diagnostic issues for one dataset
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<DiagnosticIssue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: DiagnosticIssue) {
        self.issues.push(issue);
    }

    pub fn add_warning(&mut self, category: &str, message: &str) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Warning, category, message));
    }

    pub fn add_warning_for_field(&mut self, category: &str, message: &str, year: i32, field: Field) {
        self.issues.push(
            DiagnosticIssue::new(Severity::Warning, category, message)
                .with_year(year)
                .with_field(field),
        );
    }

    pub fn add_error(&mut self, category: &str, message: &str) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Error, category, message));
    }

    pub fn add_error_for_year(&mut self, category: &str, message: &str, year: i32) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Error, category, message).with_year(year));
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &DiagnosticIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &DiagnosticIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    pub fn merge(&mut self, other: Diagnostics) {
        self.issues.extend(other.issues);
    }

    pub fn summary(&self) -> String {
        let warnings = self.warning_count();
        let errors = self.error_count();

        match (warnings, errors) {
            (0, 0) => "No issues".to_string(),
            (w, 0) => format!("{} warning{}", w, if w == 1 { "" } else { "s" }),
            (0, e) => format!("{} error{}", e, if e == 1 { "" } else { "s" }),
            (w, e) => format!(
                "{} warning{}, {} error{}",
                w,
                if w == 1 { "" } else { "s" },
                e,
                if e == 1 { "" } else { "s" }
            ),
        }
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Diagnostics: {}", self.summary())?;
        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }
        Ok(())
    }
}

/// Check a raw record sequence against the historical series invariants.
///
/// Errors: empty input, non-increasing years, gaps between years, non-finite values.
/// Warnings: negative values, renewable share outside 0-100.
pub fn diagnose_records(records: &[EnergyRecord]) -> Diagnostics {
    let mut diag = Diagnostics::new();

    if records.is_empty() {
        diag.add_error("sequence", "series contains no records");
        return diag;
    }

    for pair in records.windows(2) {
        let (prev, curr) = (pair[0].year, pair[1].year);
        if curr <= prev {
            diag.add_error_for_year(
                "sequence",
                &format!("year {curr} does not follow {prev}"),
                curr,
            );
        } else if curr != prev + 1 {
            diag.add_error_for_year(
                "sequence",
                &format!("gap between {prev} and {curr}"),
                curr,
            );
        }
    }

    for record in records {
        for field in Field::ALL {
            let value = record.get(field);
            if !value.is_finite() {
                diag.add(
                    DiagnosticIssue::new(Severity::Error, "value", "non-finite value")
                        .with_year(record.year)
                        .with_field(field),
                );
            } else if value < 0.0 {
                diag.add_warning_for_field("value", "negative value", record.year, field);
            }
        }
        if !(0.0..=100.0).contains(&record.renewable_share) {
            diag.add_warning_for_field(
                "range",
                "renewable share outside 0-100",
                record.year,
                Field::RenewableShare,
            );
        }
    }

    diag
}
