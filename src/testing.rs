//! 单元测试用的内存版 API

use crate::clients::MarketplaceApi;
use crate::error::ApiError;
use crate::models::{
    ApplicationRecord, ApplyResponse, Attachment, UploadResponse, Writer, WriterFilter,
};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// 记录下来的调用
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Colleges,
    Branches,
    Writers(WriterFilter),
    Upload(String),
    Apply(JsonValue),
}

/// `None` 表示该接口返回传输错误
#[derive(Default)]
struct Responses {
    colleges: Option<Vec<String>>,
    branches: Option<Vec<String>>,
    writers: Option<Vec<Writer>>,
    upload: Option<UploadResponse>,
    apply: Option<ApplyResponse>,
}

#[derive(Default)]
pub(crate) struct FakeMarketplace {
    responses: Mutex<Responses>,
    calls: Mutex<Vec<Call>>,
    upload_gate: Option<Arc<Notify>>,
}

pub(crate) fn transport_error(endpoint: &str) -> ApiError {
    let source = serde_json::from_str::<JsonValue>("{").unwrap_err();
    ApiError::json_parse_failed(endpoint, source)
}

pub(crate) fn writer(first: &str, last: &str, college: &str, branch: &str) -> Writer {
    serde_json::from_value(serde_json::json!({
        "first_name": first,
        "last_name": last,
        "college_name": college,
        "branch": branch,
        "rate_per_ten_pages": 20,
        "email": format!("{}@x.com", first.to_lowercase()),
    }))
    .unwrap()
}

pub(crate) fn image() -> Attachment {
    Attachment::new("student-id.png", "image/png", vec![0x89, b'P', b'N', b'G'])
}

impl FakeMarketplace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_colleges(self, colleges: &[&str]) -> Self {
        self.responses.lock().unwrap().colleges =
            Some(colleges.iter().map(|c| c.to_string()).collect());
        self
    }

    pub(crate) fn with_branches(self, branches: &[&str]) -> Self {
        self.responses.lock().unwrap().branches =
            Some(branches.iter().map(|b| b.to_string()).collect());
        self
    }

    pub(crate) fn with_writers(self, writers: Vec<Writer>) -> Self {
        self.responses.lock().unwrap().writers = Some(writers);
        self
    }

    pub(crate) fn with_upload(self, response: UploadResponse) -> Self {
        self.responses.lock().unwrap().upload = Some(response);
        self
    }

    pub(crate) fn with_apply(self, response: ApplyResponse) -> Self {
        self.responses.lock().unwrap().apply = Some(response);
        self
    }

    pub(crate) fn uploaded(self, url: &str) -> Self {
        self.with_upload(UploadResponse {
            success: true,
            url: Some(url.to_string()),
            message: None,
        })
    }

    pub(crate) fn accepted(self) -> Self {
        self.with_apply(ApplyResponse {
            success: true,
            message: None,
        })
    }

    /// 上传请求在 gate 被通知之前一直挂起
    pub(crate) fn with_upload_gate(mut self, gate: Arc<Notify>) -> Self {
        self.upload_gate = Some(gate);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn upload_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Upload(_)))
            .count()
    }

    pub(crate) fn apply_bodies(&self) -> Vec<JsonValue> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Apply(body) => Some(body),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MarketplaceApi for FakeMarketplace {
    async fn colleges(&self) -> Result<Vec<String>, ApiError> {
        self.record(Call::Colleges);
        let colleges = self.responses.lock().unwrap().colleges.clone();
        colleges.ok_or_else(|| transport_error("/api/colleges"))
    }

    async fn branches(&self) -> Result<Vec<String>, ApiError> {
        self.record(Call::Branches);
        let branches = self.responses.lock().unwrap().branches.clone();
        branches.ok_or_else(|| transport_error("/api/branches"))
    }

    async fn writers(&self, filter: &WriterFilter) -> Result<Vec<Writer>, ApiError> {
        self.record(Call::Writers(filter.clone()));
        let writers = self.responses.lock().unwrap().writers.clone();
        let writers = writers.ok_or_else(|| transport_error("/api/writers"))?;
        Ok(writers
            .into_iter()
            .filter(|w| filter.college.as_ref().map_or(true, |c| &w.college_name == c))
            .filter(|w| filter.branch.as_ref().map_or(true, |b| &w.branch == b))
            .collect())
    }

    async fn upload_student_id(&self, attachment: &Attachment) -> Result<UploadResponse, ApiError> {
        self.record(Call::Upload(attachment.file_name.clone()));
        if let Some(gate) = &self.upload_gate {
            gate.notified().await;
        }
        let upload = self.responses.lock().unwrap().upload.clone();
        upload.ok_or_else(|| transport_error("/api/upload-student-id"))
    }

    async fn apply(&self, record: &ApplicationRecord) -> Result<ApplyResponse, ApiError> {
        self.record(Call::Apply(serde_json::to_value(record).unwrap()));
        let apply = self.responses.lock().unwrap().apply.clone();
        apply.ok_or_else(|| transport_error("/api/writers/apply"))
    }
}
