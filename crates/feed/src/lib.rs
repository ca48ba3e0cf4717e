//! 从进程外部拉取健康记录的适配器。

pub mod healthpi;
