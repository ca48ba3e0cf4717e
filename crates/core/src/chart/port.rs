use crate::chart::error::ChartError;
use crate::record::entity::{Field, Record};

/// # Summary
/// 将拉取到的记录序列转换为一份图表数据。
///
/// # Invariants
/// - 无状态：输出只取决于 `records`，调用之间不保留任何数据。
/// - 同步执行直至完成。
pub trait SeriesBuilder: Send + Sync {
    /// 该构建器产出的图表数据类型
    type Output: Clone + Send + Sync + 'static;

    /// # Summary
    /// 构建器需要从数据源获取的字段。
    ///
    /// # Returns
    /// 非空且有序的字段选择。
    fn fields(&self) -> &'static [Field];

    /// # Summary
    /// 基于完整的记录序列构建图表。
    ///
    /// # Arguments
    /// * `records`: 按数据源交付顺序排列的记录。
    ///
    /// # Returns
    /// 图表数据；记录不符合约定时返回 `ChartError`。
    fn build(&self, records: &[Record]) -> Result<Self::Output, ChartError>;
}

/// # Summary
/// 成品图表的接收方（渲染侧）。
///
/// # Invariants
/// - 每次调用携带完整图表并替换此前显示的内容，不做增量更新。
pub trait ChartSink<C>: Send + Sync {
    fn render(&self, chart: C);
}
