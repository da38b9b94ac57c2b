use serde::Serialize;

/// Adherence summary for one identity's meal history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsReport {
    pub total_count: u64,
    pub compliant_count: u64,
    pub non_compliant_count: u64,
    /// Longest run of consecutive on-diet meals
    pub best_run: u64,
}
