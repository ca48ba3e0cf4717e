//! # DTO 层
//!
//! 看板 API 的响应信封。图表数据本身直接使用 core 实体（`LineChart`、
//! `ScatterChart`），它们已按渲染端的数据集形式序列化。
//! 所有 DTO 均派生 `utoipa::ToSchema`，以便出现在 Swagger 文档中。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 统一成功响应信封
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T: Serialize + ToSchema> {
    /// 恒为 true
    pub success: bool,
    /// 业务数据
    pub data: Option<T>,
    /// 成功时不使用
    pub error: Option<String>,
}

impl<T: Serialize + ToSchema> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// 失败响应信封（无业务数据）
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 恒为 false
    pub success: bool,
    /// 错误描述
    pub error: String,
}

impl ApiErrorResponse {
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}

/// 存活检查响应体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// 体重视图迄今发起的刷新次数
    #[schema(example = 1)]
    pub weight_generation: u64,
    /// 血糖视图迄今发起的刷新次数
    #[schema(example = 1)]
    pub glucose_generation: u64,
}
