use axum::Json;
use axum::extract::State;

use crate::server::AppState;
use crate::types::HealthResponse;

/// 存活检查
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "系统 (System)",
    responses(
        (status = 200, description = "服务正常", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        weight_generation: state.weight.generation(),
        glucose_generation: state.glucose.generation(),
    })
}
