use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Summary
/// 散点序列中的一个点。
///
/// # Invariants
/// - `x` 为纪元毫秒，时间轴可直接使用。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartPoint {
    #[schema(example = 1704099600000_i64)]
    pub x: i64,
    #[schema(example = 95.0)]
    pub y: f64,
}

/// # Summary
/// 带标签的折线序列，值为数字或 null，落在分类轴上。
///
/// # Invariants
/// - `data[i]` 对应所属 `LineChart` 的第 i 个标签。
/// - `null` 表示缺失，绝不写成 0。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    #[schema(example = "Weight")]
    pub label: String,
    pub data: Vec<Option<f64>>,
    // 渲染指令：跨过 null 连线而不是断开
    #[serde(default)]
    pub span_gaps: bool,
}

impl LineSeries {
    pub fn new(label: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            data,
            span_gaps: false,
        }
    }

    /// 标记该序列跨越空缺连线
    pub fn spanning_gaps(mut self) -> Self {
        self.span_gaps = true;
        self
    }
}

/// 带标签的 `(x, y)` 点序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSeries {
    #[schema(example = "After fast")]
    pub label: String,
    pub data: Vec<ChartPoint>,
    #[serde(default)]
    pub span_gaps: bool,
}

impl ScatterSeries {
    pub fn new(label: impl Into<String>, data: Vec<ChartPoint>) -> Self {
        Self {
            label: label.into(),
            data,
            span_gaps: false,
        }
    }
}

/// # Summary
/// 折线图数据：按位置对齐到标签轴的多条序列。
///
/// # Invariants
/// - 每条序列恰好包含 `labels.len()` 个值。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct LineChart {
    pub datasets: Vec<LineSeries>,
    pub labels: Vec<String>,
}

impl LineChart {
    /// 按显示标签查找序列
    pub fn dataset(&self, label: &str) -> Option<&LineSeries> {
        self.datasets.iter().find(|series| series.label == label)
    }
}

/// 散点图数据：时间轴上相互独立的点序列
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct ScatterChart {
    pub datasets: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn dataset(&self, label: &str) -> Option<&ScatterSeries> {
        self.datasets.iter().find(|series| series.label == label)
    }

    /// 所有序列的点总数
    pub fn point_count(&self) -> usize {
        self.datasets.iter().map(|series| series.data.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_chart_serializes_in_dataset_form() {
        let chart = LineChart {
            datasets: vec![
                LineSeries::new("Weight", vec![Some(80.0), None]),
                LineSeries::new("Fat", vec![Some(20.0), None]).spanning_gaps(),
            ],
            labels: vec!["2024-01-01T08:00:00".into(), "2024-01-02T08:00:00".into()],
        };

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "datasets": [
                    {"label": "Weight", "data": [80.0, null], "spanGaps": false},
                    {"label": "Fat", "data": [20.0, null], "spanGaps": true}
                ],
                "labels": ["2024-01-01T08:00:00", "2024-01-02T08:00:00"]
            })
        );
    }

    #[test]
    fn test_scatter_chart_lookup_and_count() {
        let chart = ScatterChart {
            datasets: vec![
                ScatterSeries::new("After fast", vec![ChartPoint { x: 0, y: 95.0 }]),
                ScatterSeries::new("Other", vec![]),
            ],
        };
        assert_eq!(chart.point_count(), 1);
        assert_eq!(chart.dataset("Other").map(|s| s.data.len()), Some(0));
        assert!(chart.dataset("Before meal").is_none());
    }
}
