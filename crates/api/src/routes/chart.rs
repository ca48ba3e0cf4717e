//! # 图表路由控制器
//!
//! 实现 `/api/v1/charts/*` 路径下的 REST 接口：读取当前体重图、血糖图，
//! 或让视图立即重新拉取并重建图表。

use axum::Json;
use axum::extract::State;
use healthchart_core::chart::entity::{LineChart, ScatterChart};

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{ApiErrorResponse, ApiResponse};

/// 获取当前体重图
///
/// 最近一次渲染的体重与脂肪量序列，横轴为按位置排列的时间戳。
/// 首次成功加载前返回 404。
#[utoipa::path(
    get,
    path = "/api/v1/charts/weight",
    tag = "图表 (Charts)",
    responses(
        (status = 200, description = "成功获取体重图", body = ApiResponse<LineChart>),
        (status = 404, description = "图表尚未加载", body = ApiErrorResponse)
    )
)]
pub async fn get_weight_chart(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<LineChart>>, ApiError> {
    state
        .board
        .weight()
        .map(|chart| Json(ApiResponse::ok(chart)))
        .ok_or_else(|| ApiError::NotFound("weight chart has not been loaded".into()))
}

/// 获取当前血糖图
///
/// 每种进餐上下文一条散点序列。首次成功加载前返回 404。
#[utoipa::path(
    get,
    path = "/api/v1/charts/glucose",
    tag = "图表 (Charts)",
    responses(
        (status = 200, description = "成功获取血糖图", body = ApiResponse<ScatterChart>),
        (status = 404, description = "图表尚未加载", body = ApiErrorResponse)
    )
)]
pub async fn get_glucose_chart(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ScatterChart>>, ApiError> {
    state
        .board
        .glucose()
        .map(|chart| Json(ApiResponse::ok(chart)))
        .ok_or_else(|| ApiError::NotFound("glucose chart has not been loaded".into()))
}

/// 重新加载体重图
///
/// 从后端拉取体重与体脂率并重建图表。失败时保留之前的图表。
#[utoipa::path(
    post,
    path = "/api/v1/charts/weight/refresh",
    tag = "图表 (Charts)",
    responses(
        (status = 200, description = "刷新后的体重图", body = ApiResponse<LineChart>),
        (status = 409, description = "已被更新的刷新取代", body = ApiErrorResponse),
        (status = 502, description = "后端不可用或返回了错误数据", body = ApiErrorResponse)
    )
)]
pub async fn refresh_weight_chart(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<LineChart>>, ApiError> {
    let chart = state.weight.refresh().await?;
    Ok(Json(ApiResponse::ok(chart)))
}

/// 重新加载血糖图
#[utoipa::path(
    post,
    path = "/api/v1/charts/glucose/refresh",
    tag = "图表 (Charts)",
    responses(
        (status = 200, description = "刷新后的血糖图", body = ApiResponse<ScatterChart>),
        (status = 409, description = "已被更新的刷新取代", body = ApiErrorResponse),
        (status = 502, description = "后端不可用或返回了错误数据", body = ApiErrorResponse)
    )
)]
pub async fn refresh_glucose_chart(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ScatterChart>>, ApiError> {
    let chart = state.glucose.refresh().await?;
    Ok(Json(ApiResponse::ok(chart)))
}
