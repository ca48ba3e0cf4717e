use healthchart_core::chart::error::ChartError;
use healthchart_core::chart::port::{ChartSink, SeriesBuilder};
use healthchart_core::record::port::RecordFetcher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// # Summary
/// 看板上的一张图表：拉取记录、构建数据并交给接收方。
///
/// # Invariants
/// - 每次刷新在拉取前领取新的代号，只有最新一代能到达接收方。
/// - 失败的刷新不会触碰接收方，之前的图表（或空白）保持显示。
pub struct ChartView<B: SeriesBuilder> {
    // 共享的记录数据源，由调用方构造一次
    fetcher: Arc<dyn RecordFetcher>,
    builder: B,
    sink: Arc<dyn ChartSink<B::Output>>,
    // 已发放的最新代号
    generation: AtomicU64,
    // 让“是否仍为最新”的判断与写入接收方串行执行
    apply: Mutex<()>,
}

impl<B: SeriesBuilder> ChartView<B> {
    /// # Summary
    /// 创建视图，不加载任何数据。
    ///
    /// # Arguments
    /// * `fetcher`: 与其他视图共享的记录数据源。
    /// * `builder`: 该图表的转换逻辑。
    /// * `sink`: 成品图表的接收方。
    pub fn new(
        fetcher: Arc<dyn RecordFetcher>,
        builder: B,
        sink: Arc<dyn ChartSink<B::Output>>,
    ) -> Self {
        Self {
            fetcher,
            builder,
            sink,
            generation: AtomicU64::new(0),
            apply: Mutex::new(()),
        }
    }

    /// # Summary
    /// 创建视图并完成首次加载。
    ///
    /// # Logic
    /// 1. 通过 `new` 构造视图。
    /// 2. 执行一次 `refresh`。
    ///
    /// # Returns
    /// 视图本身，以及首张图表或导致加载失败的错误。无论成败，视图都可继续刷新。
    pub async fn initialize(
        fetcher: Arc<dyn RecordFetcher>,
        builder: B,
        sink: Arc<dyn ChartSink<B::Output>>,
    ) -> (Self, Result<B::Output, ChartError>) {
        let view = Self::new(fetcher, builder, sink);
        let initial = view.refresh().await;
        (view, initial)
    }

    /// # Summary
    /// 拉取、构建并渲染一次图表。
    ///
    /// # Logic
    /// 1. 发放新的代号。
    /// 2. 拉取构建器所需字段，失败时原样返回。
    /// 3. 若已有更新的刷新开始，以 `Superseded` 丢弃结果。
    /// 4. 构建图表并将副本交给接收方。
    ///
    /// # Returns
    /// 已渲染的图表。
    pub async fn refresh(&self) -> Result<B::Output, ChartError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let fields = self.builder.fields();
        debug!(generation, ?fields, "refreshing chart");

        let records = self.fetcher.fetch(fields).await.map_err(|e| {
            warn!(generation, error = %e, "chart fetch failed");
            ChartError::from(e)
        })?;

        let _guard = self
            .apply
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            info!(generation, latest, "discarding superseded chart refresh");
            return Err(ChartError::Superseded { generation });
        }

        let chart = self.builder.build(&records).map_err(|e| {
            warn!(generation, error = %e, "chart build failed");
            e
        })?;
        self.sink.render(chart.clone());
        info!(generation, records = records.len(), "chart refreshed");

        Ok(chart)
    }

    /// 已发放的最新代号；首次刷新前为 `0`
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
