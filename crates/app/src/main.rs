mod logging;
mod settings;

use std::path::PathBuf;
use std::sync::Arc;

use healthchart_api::board::ChartBoard;
use healthchart_api::server::{AppState, start_server};
use healthchart_chart::glucose::GlucoseChartBuilder;
use healthchart_chart::view::ChartView;
use healthchart_chart::weight::WeightChartBuilder;
use healthchart_core::record::port::RecordFetcher;
use healthchart_feed::healthpi::HealthPiFetcher;
use tracing::{info, warn};

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化所有具体实现组件并通过 Arc<dyn Trait> 注入。
///
/// # Logic
/// 1. 加载配置（可通过 `HEALTHCHART_CONFIG` 指定配置文件）。
/// 2. 初始化日志。
/// 3. 只构造一次记录拉取器，并在两个视图间共享。
/// 4. 初始化两个视图；首次加载失败时该图表保持为空。
/// 5. 提供 API 服务，直到收到 Ctrl-C。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载配置
    let config_path = std::env::var_os("HEALTHCHART_CONFIG").map(PathBuf::from);
    let config = settings::load(config_path.as_deref())?;

    // 2. 初始化日志
    let _log_guard = logging::init(&config.logging)?;
    info!(endpoint = %config.endpoint.url, "HealthChart starting...");

    // 3. 实例化基础设施层
    let fetcher: Arc<dyn RecordFetcher> = Arc::new(HealthPiFetcher::from_config(&config.endpoint)?);
    let board = Arc::new(ChartBoard::new());

    // 4. 构造视图并完成首次加载
    let (weight, initial) =
        ChartView::initialize(fetcher.clone(), WeightChartBuilder, board.clone()).await;
    if let Err(e) = initial {
        warn!(error = %e, "weight chart not loaded");
    }
    let (glucose, initial) =
        ChartView::initialize(fetcher, GlucoseChartBuilder, board.clone()).await;
    if let Err(e) = initial {
        warn!(error = %e, "glucose chart not loaded");
    }

    let state = AppState {
        weight: Arc::new(weight),
        glucose: Arc::new(glucose),
        board,
    };

    // 5. 提供服务，直到收到退出信号
    let bind_addr = config.server.bind_addr();
    tokio::select! {
        served = start_server(state, &bind_addr) => served?,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received. Exiting...");
        }
    }

    Ok(())
}
