use thiserror::Error;

/// # Summary
/// 记录拉取的错误枚举，均不在本地恢复，只向上传播。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    // 未选择任何字段，因此没有发出请求
    #[error("At least one field must be selected")]
    EmptySelection,
    // 传输层错误（连接、超时、读取响应体）
    #[error("Network error: {0}")]
    Network(String),
    // 后端返回了非成功状态码
    #[error("Backend responded with HTTP {0}")]
    Status(u16),
    // 响应体不是记录组成的 JSON 数组
    #[error("Decode error: {0}")]
    Decode(String),
}
