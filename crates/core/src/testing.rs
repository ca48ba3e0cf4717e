//! 供测试使用的端口桩实现（`test-utils` feature）。

use crate::chart::port::ChartSink;
use crate::record::entity::{Field, Record};
use crate::record::error::FetchError;
use crate::record::port::RecordFetcher;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// # Summary
/// 始终返回同一批记录、并记录每次请求内容的拉取器。
pub struct StaticFetcher {
    records: Vec<Record>,
    calls: AtomicUsize,
    requested: Mutex<Vec<Vec<Field>>>,
}

impl StaticFetcher {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// 迄今为止 `fetch` 的调用次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 每次调用的字段选择，按时间先后排列
    pub fn requested(&self) -> Vec<Vec<Field>> {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl RecordFetcher for StaticFetcher {
    async fn fetch(&self, fields: &[Field]) -> Result<Vec<Record>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(fields.to_vec());
        Ok(self.records.clone())
    }
}

/// 每次调用都以给定错误失败的拉取器
pub struct FailingFetcher {
    error: FetchError,
}

impl FailingFetcher {
    pub fn new(error: FetchError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl RecordFetcher for FailingFetcher {
    async fn fetch(&self, _fields: &[Field]) -> Result<Vec<Record>, FetchError> {
        Err(self.error.clone())
    }
}

/// 保存收到的每一张图表的接收方
pub struct RecordingSink<C> {
    rendered: Mutex<Vec<C>>,
}

impl<C: Clone> RecordingSink<C> {
    pub fn new() -> Self {
        Self {
            rendered: Mutex::new(Vec::new()),
        }
    }

    pub fn rendered(&self) -> Vec<C> {
        self.rendered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<C> {
        self.rendered().pop()
    }
}

impl<C: Clone> Default for RecordingSink<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone + Send> ChartSink<C> for RecordingSink<C> {
    fn render(&self, chart: C) {
        self.rendered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(chart);
    }
}
