//! 写手申请相关的数据结构
//!
//! - `ApplicationForm`：表单原始输入的快照
//! - `ApplicantDetails`：校验后的申请人信息（尚未上传附件）
//! - `UploadedAttachment`：上传成功后得到的附件引用
//! - `ApplicationRecord`：最终提交的申请记录

use crate::error::SubmissionError;
use crate::models::Attachment;
use serde::Serialize;

/// 表单中的文本字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    CollegeName,
    Branch,
    Email,
    RatePerTenPages,
}

/// 申请表单快照
///
/// 所有文本字段保持用户输入的原样，价格也以文本形式保存
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub college_name: String,
    pub branch: String,
    pub email: String,
    pub rate_per_ten_pages: String,
    pub student_id: Option<Attachment>,
}

impl ApplicationForm {
    /// 修改单个文本字段
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::CollegeName => self.college_name = value,
            FormField::Branch => self.branch = value,
            FormField::Email => self.email = value,
            FormField::RatePerTenPages => self.rate_per_ten_pages = value,
        }
    }

    /// 清空所有字段（包括已选择的文件）
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// 校验后的申请人信息
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantDetails {
    pub first_name: String,
    pub last_name: String,
    pub college_name: String,
    pub branch: String,
    pub email: String,
    pub rate_per_ten_pages: f64,
}

impl ApplicantDetails {
    /// 从表单中提取申请人信息
    ///
    /// 价格必须能解析为有限小数，否则在发起任何请求之前失败
    pub fn from_form(form: &ApplicationForm) -> Result<Self, SubmissionError> {
        let rate = parse_rate(&form.rate_per_ten_pages).ok_or_else(|| {
            SubmissionError::InvalidRate {
                input: form.rate_per_ten_pages.clone(),
            }
        })?;

        Ok(Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            college_name: form.college_name.clone(),
            branch: form.branch.clone(),
            email: form.email.clone(),
            rate_per_ten_pages: rate,
        })
    }
}

/// 解析价格文本
pub fn parse_rate(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite())
}

/// 上传成功后得到的附件引用
///
/// 只能由上传步骤构造，保证申请记录中的地址来自服务端
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAttachment {
    url: String,
}

impl UploadedAttachment {
    pub(crate) fn new(url: String) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// 提交给 `/api/writers/apply` 的申请记录
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    first_name: String,
    last_name: String,
    college_name: String,
    branch: String,
    email: String,
    rate_per_ten_pages: f64,
    student_id_url: String,
}

impl ApplicationRecord {
    pub fn new(details: ApplicantDetails, uploaded: UploadedAttachment) -> Self {
        Self {
            first_name: details.first_name,
            last_name: details.last_name,
            college_name: details.college_name,
            branch: details.branch,
            email: details.email,
            rate_per_ten_pages: details.rate_per_ten_pages,
            student_id_url: uploaded.url,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn rate_per_ten_pages(&self) -> f64 {
        self.rate_per_ten_pages
    }

    pub fn student_id_url(&self) -> &str {
        &self.student_id_url
    }
}
