//! # API 服务器
//!
//! 组装 axum 路由、挂载 Swagger UI、配置 CORS 并绑定 TCP 监听。
//! `main()` 位于 `crates/app`，由它持有依赖图并调用本模块。

use std::sync::Arc;

use axum::Router;
use healthchart_chart::glucose::GlucoseChartBuilder;
use healthchart_chart::view::ChartView;
use healthchart_chart::weight::WeightChartBuilder;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use crate::board::ChartBoard;
use crate::routes::{chart, health};

// ============================================================
//  共享状态
// ============================================================

/// 通过 axum `State` 提取器注入每个处理函数的状态。
///
/// # Invariants
/// - 两个视图都渲染到 `board`，由 app 在启动服务前完成装配。
#[derive(Clone)]
pub struct AppState {
    /// 体重 / 脂肪量图视图
    pub weight: Arc<ChartView<WeightChartBuilder>>,
    /// 血糖图视图
    pub glucose: Arc<ChartView<GlucoseChartBuilder>>,
    /// 最近渲染的图表
    pub board: Arc<ChartBoard>,
}

// ============================================================
//  OpenAPI 文档
// ============================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HealthChart API",
        version = "0.1.0",
        description = "Chart datasets derived from HealthPi measurements: weight and fat mass over time, glucose by meal context.",
        license(name = "MIT")
    ),
    tags(
        (name = "图表 (Charts)", description = "当前图表与按需刷新"),
        (name = "系统 (System)", description = "存活检查")
    )
)]
pub struct ApiDoc;

// ============================================================
//  路由与启动
// ============================================================

/// 构建完整路由：API 路由、Swagger UI 与 CORS。
///
/// # Arguments
/// * `state` - 由 app 注入的共享状态
pub fn build_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(chart::get_weight_chart))
        .routes(routes!(chart::get_glucose_chart))
        .routes(routes!(chart::refresh_weight_chart))
        .routes(routes!(chart::refresh_glucose_chart))
        .routes(routes!(health::health))
        .with_state(state)
        .split_for_parts();

    // 渲染端来自其他源
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
}

/// 绑定 `bind_addr` 并持续提供服务，直到监听失败。
///
/// # Arguments
/// * `state` - 由 app 注入的共享状态
/// * `bind_addr` - 监听地址，例如 `"127.0.0.1:4200"`
pub async fn start_server(
    state: AppState,
    bind_addr: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);

    tracing::info!("HealthChart API listening on {}", bind_addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
