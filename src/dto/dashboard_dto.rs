use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardStatsQuery {
    #[serde(rename = "companyId")]
    pub company_id: Option<String>,
}

/// Closure-time histogram: `labels[i]` is the job offer whose process took
/// `values[i]` days to close (null when the process has none). Ordered
/// oldest closure first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosureHistory {
    pub labels: Vec<Option<String>>,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "activosCount")]
    pub active_count: i64,
    #[serde(rename = "cerradosCount")]
    pub closed_count: i64,
    #[serde(rename = "cerradostrimestreCount")]
    pub closed_last_quarter_count: i64,
    #[serde(rename = "profesionalesCount")]
    pub active_candidate_count: i64,
    #[serde(rename = "historicoTiempos")]
    pub closure_history: ClosureHistory,
    #[serde(rename = "diasDesdeUltimoProcesoActivo")]
    pub days_since_last_active_process: i64,
    #[serde(rename = "promedioCierre")]
    pub average_closure_days: i64,
}
