use healthchart_core::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// # Summary
/// 安装全局 tracing 订阅器。
///
/// # Logic
/// 1. 过滤规则取自 `RUST_LOG`，缺省时使用 `config.filter`。
/// 2. 始终输出到 stdout。
/// 3. 设置了 `config.directory` 时，另经非阻塞写入器写入按天滚动的日志文件。
///
/// # Returns
/// 文件写入器的 guard，需要在整个日志生命周期内保持存活。
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)?,
    };

    match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "healthchart.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .try_init()?;
            Ok(None)
        }
    }
}
