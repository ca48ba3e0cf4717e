//! 记录到图表的转换：体重/体脂与血糖序列构建器，
//! 以及把拉取器、构建器和接收方串起来的视图。

pub mod glucose;
pub mod view;
pub mod weight;
