//! # `healthchart-core`
//!
//! 健康看板的领域模型：HealthPi 后端下发的记录、由记录派生的图表数据，
//! 以及各适配器 crate 需要实现的端口 (trait)。

pub mod common;
pub mod config;

pub mod record {
    pub mod entity;
    pub mod error;
    pub mod port;
}

pub mod chart {
    pub mod entity;
    pub mod error;
    pub mod port;
}

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
