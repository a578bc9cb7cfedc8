use crate::{
    dto::dashboard_dto::DashboardStatsQuery,
    error::{Error, Result},
    models::process::CompanyFilter,
    utils::time,
    AppState,
};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

#[axum::debug_handler]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    Query(query): Query<DashboardStatsQuery>,
) -> Result<impl IntoResponse> {
    let filter = CompanyFilter::parse(query.company_id.as_deref()).map_err(Error::BadRequest)?;

    let stats = state
        .stats_service
        .compute_stats(filter, time::now())
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, company_id = ?filter.company_id, "Failed to compute dashboard stats");
            Error::Internal("Error fetching dashboard statistics".to_string())
        })?;

    Ok(Json(stats))
}
