//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 reqwest::Client 资源，只暴露"发请求并解析 JSON"的能力

use crate::error::ApiError;
use crate::utils::truncate_text;
use reqwest::multipart::Form;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// HTTP 执行器
///
/// 职责：
/// - 持有唯一的 Client 和 API 根地址
/// - 暴露 GET / POST JSON / POST multipart 能力
/// - 不认识 Writer / Application
/// - 不处理业务流程
///
/// 响应体无论 HTTP 状态码如何都按 JSON 解析，后端在 body 中报告失败。
/// 本层不设置超时，沿用 Client 的默认行为。
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExecutor {
    /// 创建新的 HTTP 执行器
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// 使用已有的 Client 创建
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET 请求并反序列化 JSON
    ///
    /// # 参数
    /// - `path`: 以 `/` 开头的路径
    /// - `query`: 查询参数，为空时不附加 `?`
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(path, e))?;
        Self::parse_json(path, response).await
    }

    /// POST JSON 请求体并反序列化 JSON 响应
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(path, e))?;
        Self::parse_json(path, response).await
    }

    /// POST multipart 表单并反序列化 JSON 响应
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(path, e))?;
        Self::parse_json(path, response).await
    }

    async fn parse_json<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::request_failed(path, e))?;

        debug!("{} 响应: status={}, {} 字节", path, status, body.len());

        serde_json::from_slice(&body).map_err(|e| {
            warn!(
                "{} 响应无法解析: {}",
                path,
                truncate_text(&String::from_utf8_lossy(&body), 120)
            );
            ApiError::json_parse_failed(path, e)
        })
    }
}
