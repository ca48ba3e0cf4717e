use healthchart_core::chart::entity::{ChartPoint, ScatterChart, ScatterSeries};
use healthchart_core::chart::error::ChartError;
use healthchart_core::chart::port::SeriesBuilder;
use healthchart_core::common::time::epoch_millis;
use healthchart_core::record::entity::{Field, MealContext, Record};
use tracing::debug;

/// # Summary
/// 构建血糖图：每种进餐上下文对应一条散点序列。
///
/// # Logic
/// 1. 保留带血糖值的记录（包括 0）。
/// 2. 按 `meal` 分类，缺失时归为 `NoIndication`。
/// 3. 投影为 `(时间戳的纪元毫秒, 血糖值)`。
/// 4. 按 `MealContext::BUCKET_ORDER` 分组，组内保持交付顺序。
///
/// # Arguments
/// * `records`: 按交付顺序排列的记录。
///
/// # Returns
/// 四条序列 ("After fast", "After meal", "Before meal", "Other")；
/// 若某条血糖读数的时间戳无法落到时间轴上，返回首个这样的
/// `ChartError::MalformedTimestamp`。
pub fn build(records: &[Record]) -> Result<ScatterChart, ChartError> {
    let points = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record
                .values
                .glucose
                .map(|glucose| classify(index, record, glucose))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let datasets = MealContext::BUCKET_ORDER
        .iter()
        .map(|meal| {
            let data = points
                .iter()
                .filter(|(context, _)| context == meal)
                .map(|(_, point)| *point)
                .collect();
            ScatterSeries::new(meal.bucket_label(), data)
        })
        .collect();

    debug!(
        records = records.len(),
        readings = points.len(),
        "built glucose chart"
    );

    Ok(ScatterChart { datasets })
}

fn classify(
    index: usize,
    record: &Record,
    glucose: f64,
) -> Result<(MealContext, ChartPoint), ChartError> {
    let x = epoch_millis(&record.timestamp).ok_or_else(|| ChartError::MalformedTimestamp {
        index,
        timestamp: record.timestamp.clone(),
    })?;
    let meal = record.values.meal.unwrap_or_default();

    Ok((meal, ChartPoint { x, y: glucose }))
}

/// 血糖图的 `SeriesBuilder`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlucoseChartBuilder;

impl SeriesBuilder for GlucoseChartBuilder {
    type Output = ScatterChart;

    fn fields(&self) -> &'static [Field] {
        &[Field::Glucose, Field::Meal]
    }

    fn build(&self, records: &[Record]) -> Result<ScatterChart, ChartError> {
        build(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthchart_core::record::entity::Values;

    fn reading(timestamp: &str, glucose: Option<f64>, meal: Option<MealContext>) -> Record {
        Record::new(
            timestamp,
            Values {
                glucose,
                meal,
                ..Values::default()
            },
        )
    }

    fn points(chart: &ScatterChart, label: &str) -> Vec<(i64, f64)> {
        chart
            .dataset(label)
            .map(|s| s.data.iter().map(|p| (p.x, p.y)).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_glucose_scenario() {
        let records = vec![
            reading("2024-01-01T09:00:00", Some(95.0), Some(MealContext::NoMeal)),
            reading("2024-01-01T13:00:00", Some(140.0), Some(MealContext::AfterMeal)),
        ];

        let chart = build(&records).unwrap();

        assert_eq!(points(&chart, "After fast"), [(1_704_099_600_000, 95.0)]);
        assert_eq!(points(&chart, "After meal"), [(1_704_114_000_000, 140.0)]);
        assert!(points(&chart, "Before meal").is_empty());
        assert!(points(&chart, "Other").is_empty());
    }

    #[test]
    fn test_buckets_are_emitted_in_fixed_order() {
        let chart = build(&[]).unwrap();
        let labels: Vec<_> = chart.datasets.iter().map(|s| s.label.as_str()).collect();

        assert_eq!(labels, ["After fast", "After meal", "Before meal", "Other"]);
        assert!(chart.datasets.iter().all(|s| !s.span_gaps));
    }

    #[test]
    fn test_every_reading_lands_in_exactly_one_bucket() {
        let records = vec![
            reading("2024-01-01T07:00:00", Some(90.0), Some(MealContext::NoMeal)),
            reading("2024-01-01T08:00:00", None, Some(MealContext::AfterMeal)),
            reading("2024-01-01T09:00:00", Some(150.0), Some(MealContext::AfterMeal)),
            reading("2024-01-01T11:30:00", Some(100.0), Some(MealContext::BeforeMeal)),
            reading("2024-01-01T12:00:00", Some(110.0), Some(MealContext::NoIndication)),
            reading("2024-01-01T18:00:00", Some(120.0), None),
            Record::new(
                "2024-01-01T19:00:00",
                Values {
                    weight: Some(80.0),
                    ..Values::default()
                },
            ),
        ];
        let with_glucose = records.iter().filter(|r| r.values.glucose.is_some()).count();

        let chart = build(&records).unwrap();

        assert_eq!(chart.point_count(), with_glucose);
        for label in ["After fast", "After meal", "Before meal"] {
            assert_eq!(points(&chart, label).len(), 1, "{label}");
        }
        assert_eq!(points(&chart, "Other").len(), 2);
    }

    #[test]
    fn test_zero_glucose_is_kept() {
        let chart = build(&[reading(
            "2024-01-01T09:00:00",
            Some(0.0),
            Some(MealContext::BeforeMeal),
        )])
        .unwrap();

        assert_eq!(points(&chart, "Before meal"), [(1_704_099_600_000, 0.0)]);
    }

    #[test]
    fn test_missing_meal_goes_to_other() {
        let chart = build(&[reading("2024-01-01T09:00:00", Some(101.0), None)]).unwrap();

        assert_eq!(points(&chart, "Other"), [(1_704_099_600_000, 101.0)]);
        assert_eq!(chart.point_count(), 1);
    }

    #[test]
    fn test_bucket_keeps_delivery_order() {
        let records = vec![
            reading("2024-01-03T09:00:00", Some(3.0), Some(MealContext::NoMeal)),
            reading("2024-01-01T09:00:00", Some(1.0), Some(MealContext::NoMeal)),
            reading("2024-01-01T09:00:00", Some(2.0), Some(MealContext::NoMeal)),
        ];

        let chart = build(&records).unwrap();
        let ys: Vec<_> = points(&chart, "After fast").into_iter().map(|(_, y)| y).collect();

        assert_eq!(ys, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_malformed_timestamp_is_rejected() {
        let records = vec![
            reading("2024-01-01T09:00:00", Some(95.0), None),
            reading("01/02/2024 09:00", Some(96.0), None),
        ];

        let err = build(&records).unwrap_err();

        assert_eq!(
            err,
            ChartError::MalformedTimestamp {
                index: 1,
                timestamp: "01/02/2024 09:00".to_string(),
            }
        );
    }

    #[test]
    fn test_lenient_timestamp_forms_are_rejected() {
        for timestamp in ["24-01-01T09:00:00", "2024-1-1T9:0:0", "+2024-01-01T09:00:00"] {
            let err = build(&[reading(timestamp, Some(95.0), Some(MealContext::NoMeal))])
                .unwrap_err();

            assert_eq!(
                err,
                ChartError::MalformedTimestamp {
                    index: 0,
                    timestamp: timestamp.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_malformed_timestamp_without_glucose_is_ignored() {
        let records = vec![
            Record::new("not a time", Values::default()),
            reading("2024-01-01T09:00:00", Some(95.0), None),
        ];

        assert_eq!(build(&records).unwrap().point_count(), 1);
    }
}
