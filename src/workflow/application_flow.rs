//! 写手申请流程 - 流程层
//!
//! 核心职责：定义"一次申请"的完整处理流程
//!
//! 流程顺序：
//! 1. 单飞检查 → 附件检查 → 价格校验（均不发请求）
//! 2. 上传学生证 → 得到文件地址
//! 3. 组装申请记录 → 提交
//!
//! 第 3 步失败时，第 2 步已上传的文件不会被清理。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::clients::marketplace_client::UPLOAD_STUDENT_ID_ENDPOINT;
use crate::clients::MarketplaceApi;
use crate::error::{ApiError, SubmissionError};
use crate::models::{
    ApplicantDetails, ApplicationForm, ApplicationRecord, Attachment, UploadResponse,
    UploadedAttachment,
};
use crate::workflow::in_flight::InFlight;
use crate::workflow::submission_ctx::SubmissionCtx;

/// 提交成功后的回执
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// 学生证在服务端的地址
    pub student_id_url: String,
    /// 服务端附带的提示（可能为空）
    pub message: Option<String>,
}

/// 申请提交流程
///
/// - 编排"上传 → 提交"两步
/// - 每次调用最多一次上传、一次提交，不重试
/// - 同一实例上的并发调用会被拒绝
pub struct ApplicationFlow {
    api: Arc<dyn MarketplaceApi>,
    in_flight: InFlight,
    attempts: AtomicUsize,
}

impl ApplicationFlow {
    /// 创建新的申请流程
    pub fn new(api: Arc<dyn MarketplaceApi>) -> Self {
        Self {
            api,
            in_flight: InFlight::new(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// 是否有提交正在进行
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_busy()
    }

    pub async fn run(&self, form: &ApplicationForm) -> Result<SubmissionReceipt, SubmissionError> {
        let _guard = self
            .in_flight
            .try_begin()
            .ok_or(SubmissionError::AlreadySubmitting)?;

        let attempt = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
        let ctx = SubmissionCtx::new(attempt, form.email.clone());

        let result = self.execute(form, &ctx).await;
        match &result {
            Ok(receipt) => info!("{} ✓ 申请提交成功 ({})", ctx, receipt.student_id_url),
            Err(e) if e.is_local() => warn!("{} ⚠️ 本地校验未通过: {}", ctx, e),
            Err(e) => warn!("{} ❌ 申请提交失败: {}", ctx, e),
        }
        result
    }

    async fn execute(
        &self,
        form: &ApplicationForm,
        ctx: &SubmissionCtx,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let attachment = form
            .student_id
            .as_ref()
            .ok_or(SubmissionError::MissingAttachment)?;
        let details = ApplicantDetails::from_form(form)?;

        let uploaded = self.upload(attachment, ctx).await?;
        let record = ApplicationRecord::new(details, uploaded);
        self.submit(&record, ctx).await
    }

    /// 第一步：上传学生证
    async fn upload(
        &self,
        attachment: &Attachment,
        ctx: &SubmissionCtx,
    ) -> Result<UploadedAttachment, SubmissionError> {
        info!("{} 📤 正在上传学生证: {}", ctx, attachment.file_name);

        match self.api.upload_student_id(attachment).await? {
            UploadResponse {
                success: true,
                url: Some(url),
                ..
            } if !url.is_empty() => {
                info!("{} ✓ 学生证上传成功", ctx);
                Ok(UploadedAttachment::new(url))
            }
            UploadResponse { success: true, .. } => Err(ApiError::MissingUploadUrl {
                endpoint: UPLOAD_STUDENT_ID_ENDPOINT.to_string(),
            }
            .into()),
            UploadResponse { message, .. } => Err(SubmissionError::UploadFailed { message }),
        }
    }

    /// 第二步：提交申请记录
    async fn submit(
        &self,
        record: &ApplicationRecord,
        ctx: &SubmissionCtx,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        info!("{} 📨 正在提交申请...", ctx);

        let response = self.api.apply(record).await?;
        if response.success {
            Ok(SubmissionReceipt {
                student_id_url: record.student_id_url().to_string(),
                message: response.message,
            })
        } else {
            Err(SubmissionError::Rejected {
                message: response.message,
            })
        }
    }
}
