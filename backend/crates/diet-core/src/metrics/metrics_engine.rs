//! Adherence metrics over a snapshot of one identity's meals.
//!
//! The engine owns ordering: callers may hand it meals in any order, and it
//! always scans them in [`Meal::most_recent_first`] order, the same order the
//! meal ledger lists them in.

use crate::{Meal, MetricsReport};

pub struct MetricsEngine;

impl MetricsEngine {
    /// Compute counts and the best on-diet streak.
    ///
    /// Sorts a borrowed view once, then the counts and the streak share a
    /// single scan.
    pub fn compute(meals: &[Meal]) -> MetricsReport {
        let mut ordered: Vec<&Meal> = meals.iter().collect();
        ordered.sort_by(|a, b| Meal::most_recent_first(a, b));

        Self::scan(ordered.into_iter().map(|meal| meal.is_on_diet))
    }

    /// Run-length scan over compliance flags that are already in canonical order
    pub fn scan<I>(flags: I) -> MetricsReport
    where
        I: IntoIterator<Item = bool>,
    {
        let mut report = MetricsReport::default();
        let mut current_run = 0u64;

        for is_on_diet in flags {
            report.total_count += 1;

            if is_on_diet {
                report.compliant_count += 1;
                current_run += 1;
            } else {
                report.non_compliant_count += 1;
                current_run = 0;
            }

            report.best_run = report.best_run.max(current_run);
        }

        report
    }
}
