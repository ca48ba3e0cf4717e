//! # `healthchart-api` - 看板 HTTP API
//!
//! 将 `healthchart-chart` 构建的图表提供给浏览器渲染端。
//! 路由基于 `axum` 构建，`utoipa` 生成 Swagger UI 背后的 OpenAPI 3.0 文档。
//!
//! ## 职责
//! - 保存每个视图的最新图表（`board::ChartBoard`，即渲染接收方）
//! - 暴露当前图表以及每张图表的刷新入口
//! - 将图表与拉取错误映射为 HTTP 状态码

pub mod board;
pub mod error;
pub mod routes;
pub mod server;
pub mod types;
