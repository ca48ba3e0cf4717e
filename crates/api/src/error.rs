//! # API 错误处理
//!
//! 将图表与拉取错误映射为 HTTP 状态码和 JSON 响应体。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use healthchart_core::chart::error::ChartError;
use thiserror::Error;

use crate::types::ApiErrorResponse;

/// 502 响应体中返回给客户端的固定消息
pub const UPSTREAM_FAILURE: &str = "Chart data is unavailable from the backend";

/// 统一的 API 错误
#[derive(Error, Debug)]
pub enum ApiError {
    /// 资源尚不可用 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 更新的请求胜出 (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// HealthPi 后端失败或返回了不可用的数据 (502)
    #[error("Bad gateway: {0}")]
    BadGateway(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::BadGateway(msg) => {
                // 上游错误只记录日志，不向客户端透传细节
                tracing::warn!("upstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, UPSTREAM_FAILURE.to_string())
            }
        };

        let body = Json(ApiErrorResponse::from_msg(message));
        (status, body).into_response()
    }
}

impl From<ChartError> for ApiError {
    fn from(err: ChartError) -> Self {
        match &err {
            ChartError::Superseded { .. } => ApiError::Conflict(err.to_string()),
            ChartError::Fetch(_) | ChartError::MalformedTimestamp { .. } => {
                ApiError::BadGateway(err.to_string())
            }
        }
    }
}
