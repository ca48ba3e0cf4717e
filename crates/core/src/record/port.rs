use crate::record::entity::{Field, Record};
use crate::record::error::FetchError;
use async_trait::async_trait;

/// # Summary
/// 健康记录数据源端口。
///
/// # Invariants
/// - 每次调用至多发出一次请求，不做重试、缓存或分页。
/// - 记录按数据源返回的顺序交付。
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    /// # Summary
    /// 拉取携带任一所请求字段的全部记录。
    ///
    /// # Logic
    /// 1. 空选择直接拒绝，不访问网络。
    /// 2. 按顺序将 `fields` 编码进同一个请求。
    /// 3. 从唯一的响应中解码完整结果集。
    ///
    /// # Arguments
    /// * `fields`: 非空的字段选择。
    ///
    /// # Returns
    /// 成功时返回记录列表，否则返回 `FetchError`。
    async fn fetch(&self, fields: &[Field]) -> Result<Vec<Record>, FetchError>;
}
