//! # 图表看板
//!
//! 进程内的渲染接收方：保存每类最近一次渲染的图表，供 HTTP 层交给浏览器。

use std::sync::RwLock;

use healthchart_core::chart::entity::{LineChart, ScatterChart};
use healthchart_core::chart::port::ChartSink;

/// 最新的体重图与血糖图。
///
/// # Invariants
/// - 对应视图首次渲染前，槽位为 `None`。
/// - 写入替换整张图表，读取方不会看到半成品。
#[derive(Debug, Default)]
pub struct ChartBoard {
    weight: RwLock<Option<LineChart>>,
    glucose: RwLock<Option<ScatterChart>>,
}

impl ChartBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(&self) -> Option<LineChart> {
        read(&self.weight)
    }

    pub fn glucose(&self) -> Option<ScatterChart> {
        read(&self.glucose)
    }
}

fn read<C: Clone>(slot: &RwLock<Option<C>>) -> Option<C> {
    slot.read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

fn replace<C>(slot: &RwLock<Option<C>>, chart: C) {
    *slot
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(chart);
}

impl ChartSink<LineChart> for ChartBoard {
    fn render(&self, chart: LineChart) {
        tracing::debug!(labels = chart.labels.len(), "weight chart updated");
        replace(&self.weight, chart);
    }
}

impl ChartSink<ScatterChart> for ChartBoard {
    fn render(&self, chart: ScatterChart) {
        tracing::debug!(points = chart.point_count(), "glucose chart updated");
        replace(&self.glucose, chart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthchart_core::chart::entity::LineSeries;

    #[test]
    fn test_board_starts_empty_and_keeps_latest() {
        let board = ChartBoard::new();
        assert!(board.weight().is_none());
        assert!(board.glucose().is_none());

        let first = LineChart {
            datasets: vec![LineSeries::new("Weight", vec![Some(80.0)])],
            labels: vec!["2024-01-01T08:00:00".into()],
        };
        let second = LineChart::default();
        board.render(first);
        board.render(second.clone());

        assert_eq!(board.weight(), Some(second));
        assert!(board.glucose().is_none());
    }
}
