use async_trait::async_trait;
use healthchart_core::config::EndpointConfig;
use healthchart_core::record::entity::{Field, Record};
use healthchart_core::record::error::FetchError;
use healthchart_core::record::port::RecordFetcher;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// # Summary
/// 基于 HealthPi HTTP API 的记录拉取器实现。
///
/// # Invariants
/// - 使用 `reqwest` 异步客户端，每次 `fetch` 发出一次 GET。
/// - 不重试，不缓存。
#[derive(Clone)]
pub struct HealthPiFetcher {
    // 后端基础地址，例如 http://localhost:8080/
    endpoint: String,
    client: Client,
}

impl HealthPiFetcher {
    /// # Summary
    /// 为给定地址创建拉取器。
    ///
    /// # Logic
    /// 1. 确保已安装 rustls 加密提供者（`rustls-no-provider` 特性下 reqwest
    ///    不会自带），HTTPS 与 HTTP 地址均可使用。
    /// 2. 以请求超时构建 `reqwest` 客户端。
    ///
    /// # Arguments
    /// * `endpoint`: 后端基础地址。
    /// * `timeout`: 整个请求的超时上限。
    ///
    /// # Returns
    /// 拉取器；客户端无法构建时返回 `FetchError::Network`。
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        ensure_crypto_provider();

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn from_config(config: &EndpointConfig) -> Result<Self, FetchError> {
        Self::new(
            config.url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn ensure_crypto_provider() {
    if rustls::crypto::CryptoProvider::get_default().is_none()
        && rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
    {
        debug!("rustls crypto provider was installed concurrently");
    }
}

/// 按选择顺序以逗号连接的线路名称
fn select_param(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl RecordFetcher for HealthPiFetcher {
    /// # Summary
    /// 拉取携带所选字段的全部记录。
    ///
    /// # Logic
    /// 1. 空选择在任何 I/O 之前被拒绝。
    /// 2. 发送 `GET <endpoint>?select=<fields>`。
    /// 3. 任何非 2xx 状态都视为失败。
    /// 4. 将响应体解码为记录 JSON 数组，保持原有顺序。
    ///
    /// # Arguments
    /// * `fields`: 非空的字段选择。
    ///
    /// # Returns
    /// 记录列表，或描述失败原因的 `FetchError`。
    async fn fetch(&self, fields: &[Field]) -> Result<Vec<Record>, FetchError> {
        if fields.is_empty() {
            return Err(FetchError::EmptySelection);
        }
        let select = select_param(fields);
        debug!(endpoint = %self.endpoint, %select, "fetching records");

        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("select", select.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "record request failed");
                FetchError::Network(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, %status, "backend rejected record request");
            return Err(FetchError::Status(status.as_u16()));
        }

        let records: Vec<Record> = resp.json().await.map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "record response is not decodable");
            FetchError::Decode(e.to_string())
        })?;

        debug!(count = records.len(), %select, "fetched records");
        Ok(records)
    }
}
