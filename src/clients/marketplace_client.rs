/// 写手市场 API 客户端
///
/// 封装所有与后端 REST API 相关的调用逻辑
use crate::config::Config;
use crate::error::ApiError;
use crate::infrastructure::HttpExecutor;
use crate::models::{ApplicationRecord, ApplyResponse, Attachment, UploadResponse, Writer, WriterFilter};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

pub const COLLEGES_ENDPOINT: &str = "/api/colleges";
pub const BRANCHES_ENDPOINT: &str = "/api/branches";
pub const WRITERS_ENDPOINT: &str = "/api/writers";
pub const UPLOAD_STUDENT_ID_ENDPOINT: &str = "/api/upload-student-id";
pub const APPLY_ENDPOINT: &str = "/api/writers/apply";

/// multipart 表单中附件字段的名称
pub const UPLOAD_FIELD_NAME: &str = "file";

/// 后端 API 能力
///
/// 返回值是原始的响应结构，成功/失败的业务判断由上层完成
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// `GET /api/colleges`
    async fn colleges(&self) -> Result<Vec<String>, ApiError>;

    /// `GET /api/branches`
    async fn branches(&self) -> Result<Vec<String>, ApiError>;

    /// `GET /api/writers`，附带非空的筛选条件
    async fn writers(&self, filter: &WriterFilter) -> Result<Vec<Writer>, ApiError>;

    /// `POST /api/upload-student-id`
    async fn upload_student_id(&self, attachment: &Attachment) -> Result<UploadResponse, ApiError>;

    /// `POST /api/writers/apply`
    async fn apply(&self, record: &ApplicationRecord) -> Result<ApplyResponse, ApiError>;
}

/// 基于 HTTP 的 API 客户端
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    executor: HttpExecutor,
}

impl MarketplaceClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Self {
        Self {
            executor: HttpExecutor::new(config.api_base_url.clone()),
        }
    }

    /// 使用已有的执行器创建
    pub fn with_executor(executor: HttpExecutor) -> Self {
        Self { executor }
    }

    pub fn base_url(&self) -> &str {
        self.executor.base_url()
    }

    fn build_upload_form(attachment: &Attachment) -> Result<Form, ApiError> {
        let part = Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.mime_type)
            .map_err(|source| ApiError::InvalidMultipart {
                mime_type: attachment.mime_type.clone(),
                source,
            })?;

        Ok(Form::new().part(UPLOAD_FIELD_NAME, part))
    }
}

#[async_trait]
impl MarketplaceApi for MarketplaceClient {
    async fn colleges(&self) -> Result<Vec<String>, ApiError> {
        self.executor.get_json(COLLEGES_ENDPOINT, &[]).await
    }

    async fn branches(&self) -> Result<Vec<String>, ApiError> {
        self.executor.get_json(BRANCHES_ENDPOINT, &[]).await
    }

    async fn writers(&self, filter: &WriterFilter) -> Result<Vec<Writer>, ApiError> {
        let query = filter.query_pairs();
        debug!("查询写手列表，筛选条件: {:?}", query);
        self.executor.get_json(WRITERS_ENDPOINT, &query).await
    }

    async fn upload_student_id(&self, attachment: &Attachment) -> Result<UploadResponse, ApiError> {
        let form = Self::build_upload_form(attachment)?;
        debug!(
            "上传附件 Payload: {} ({}, {} 字节)",
            attachment.file_name,
            attachment.mime_type,
            attachment.len()
        );
        self.executor
            .post_multipart(UPLOAD_STUDENT_ID_ENDPOINT, form)
            .await
    }

    async fn apply(&self, record: &ApplicationRecord) -> Result<ApplyResponse, ApiError> {
        debug!("提交申请 Payload: {:?}", record);
        self.executor.post_json(APPLY_ENDPOINT, record).await
    }
}
