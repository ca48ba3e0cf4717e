use healthchart_core::chart::entity::{LineChart, LineSeries};
use healthchart_core::chart::error::ChartError;
use healthchart_core::chart::port::SeriesBuilder;
use healthchart_core::record::entity::{Field, Record, Values};
use tracing::debug;

pub const WEIGHT_LABEL: &str = "Weight";
pub const FAT_LABEL: &str = "Fat";

/// # Summary
/// 构建体重图：在位置标签轴上展示原始体重和推导出的脂肪量。
///
/// # Logic
/// 1. `labels[i]` 为第 i 条记录的时间戳，原样保留、不排序。
/// 2. `Weight[i]` 为该记录的体重或 `null`。
/// 3. `Fat[i]` 为该记录的脂肪量或 `null`，该序列跨越空缺连线。
///
/// # Arguments
/// * `records`: 按交付顺序排列的记录。
///
/// # Returns
/// 两条序列与 `labels` 按下标对齐的 `LineChart`。
pub fn build(records: &[Record]) -> LineChart {
    let labels = records.iter().map(|r| r.timestamp.clone()).collect();
    let weights = records.iter().map(|r| r.values.weight).collect();
    let fat_masses: Vec<_> = records.iter().map(|r| fat_mass(&r.values)).collect();

    debug!(
        records = records.len(),
        fat_points = fat_masses.iter().flatten().count(),
        "built weight chart"
    );

    LineChart {
        datasets: vec![
            LineSeries::new(WEIGHT_LABEL, weights),
            LineSeries::new(FAT_LABEL, fat_masses).spanning_gaps(),
        ],
        labels,
    }
}

/// 脂肪量 (kg)，需要非零体重和体脂率
fn fat_mass(values: &Values) -> Option<f64> {
    match (values.weight, values.fat_percent) {
        (Some(weight), Some(fat_percent)) if weight != 0.0 => Some(weight * fat_percent / 100.0),
        _ => None,
    }
}

/// 体重图的 `SeriesBuilder`
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightChartBuilder;

impl SeriesBuilder for WeightChartBuilder {
    type Output = LineChart;

    fn fields(&self) -> &'static [Field] {
        &[Field::Weight, Field::FatPercent]
    }

    fn build(&self, records: &[Record]) -> Result<LineChart, ChartError> {
        Ok(build(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str, weight: Option<f64>, fat_percent: Option<f64>) -> Record {
        Record::new(
            timestamp,
            Values {
                weight,
                fat_percent,
                ..Values::default()
            },
        )
    }

    fn series<'a>(chart: &'a LineChart, label: &str) -> &'a [Option<f64>] {
        chart
            .dataset(label)
            .map(|s| s.data.as_slice())
            .unwrap_or_default()
    }

    #[test]
    fn test_weight_and_fat_scenario() {
        let records = vec![
            record("2024-01-01T08:00:00", Some(80.0), Some(25.0)),
            record("2024-01-02T08:00:00", Some(79.0), None),
        ];

        let chart = build(&records);

        assert_eq!(chart.labels, ["2024-01-01T08:00:00", "2024-01-02T08:00:00"]);
        assert_eq!(series(&chart, WEIGHT_LABEL), [Some(80.0), Some(79.0)]);
        assert_eq!(series(&chart, FAT_LABEL), [Some(20.0), None]);
    }

    #[test]
    fn test_series_stay_aligned_with_labels() {
        let records = vec![
            record("2024-01-03T08:00:00", None, Some(21.0)),
            record("2024-01-01T08:00:00", Some(81.0), None),
            record("2024-01-01T08:00:00", None, None),
            Record::new("2024-01-04T08:00:00", Values::default()),
            record("2024-01-02T08:00:00", Some(70.0), Some(20.0)),
        ];

        let chart = build(&records);

        assert_eq!(chart.labels.len(), records.len());
        for dataset in &chart.datasets {
            assert_eq!(dataset.data.len(), records.len(), "{}", dataset.label);
        }
        // 保持交付顺序，保留重复项
        assert_eq!(chart.labels[0], "2024-01-03T08:00:00");
        assert_eq!(chart.labels[1], chart.labels[2]);
    }

    #[test]
    fn test_missing_weight_is_null_not_zero() {
        let chart = build(&[record("2024-01-01T08:00:00", None, Some(30.0))]);

        assert_eq!(series(&chart, WEIGHT_LABEL), [None]);
        assert_eq!(series(&chart, FAT_LABEL), [None]);
    }

    #[test]
    fn test_fat_mass_is_weight_times_percentage() {
        let chart = build(&[record("2024-01-01T08:00:00", Some(70.0), Some(20.0))]);
        assert_eq!(series(&chart, FAT_LABEL), [Some(14.0)]);
    }

    #[test]
    fn test_fat_mass_needs_non_zero_weight() {
        let chart = build(&[
            record("2024-01-01T08:00:00", Some(0.0), Some(20.0)),
            record("2024-01-02T08:00:00", Some(80.0), Some(0.0)),
        ]);

        assert_eq!(series(&chart, WEIGHT_LABEL), [Some(0.0), Some(80.0)]);
        assert_eq!(series(&chart, FAT_LABEL), [None, Some(0.0)]);
    }

    #[test]
    fn test_only_fat_series_spans_gaps() {
        let chart = build(&[]);

        assert!(chart.labels.is_empty());
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.dataset(WEIGHT_LABEL).map(|s| s.span_gaps), Some(false));
        assert_eq!(chart.dataset(FAT_LABEL).map(|s| s.span_gaps), Some(true));
    }

    #[test]
    fn test_builder_requests_weight_fields() {
        assert_eq!(WeightChartBuilder.fields(), [Field::Weight, Field::FatPercent]);
    }
}
