use diet_core::MetricsReport;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub meals_quantity: u64,
    pub on_diet_meals_count: u64,
    pub out_of_diet_meals_count: u64,
    pub best_on_diet_sequence: u64,
}

impl From<MetricsReport> for MetricsResponse {
    fn from(report: MetricsReport) -> Self {
        Self {
            meals_quantity: report.total_count,
            on_diet_meals_count: report.compliant_count,
            out_of_diet_meals_count: report.non_compliant_count,
            best_on_diet_sequence: report.best_run,
        }
    }
}
