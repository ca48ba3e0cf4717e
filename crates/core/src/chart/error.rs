use crate::record::error::FetchError;
use thiserror::Error;

/// # Summary
/// 生成图表过程中的错误枚举。
///
/// # Invariants
/// - 可选值缺失不是错误，构建器会改用 `null` 或约定的默认值。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    // 底层记录拉取失败
    #[error(transparent)]
    Fetch(#[from] FetchError),
    // 需要落在时间轴上的记录时间戳无法解析
    #[error("Record {index} has malformed timestamp {timestamp:?}")]
    MalformedTimestamp { index: usize, timestamp: String },
    // 本次刷新进行中时，已有更新的刷新开始
    #[error("Refresh {generation} was superseded by a newer one")]
    Superseded { generation: u64 },
}
