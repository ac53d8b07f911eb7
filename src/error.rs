use thiserror::Error;

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    /// multipart 表单构建失败（通常是 MIME 类型非法）
    #[error("无法构建上传表单 (MIME: {mime_type}): {source}")]
    InvalidMultipart {
        mime_type: String,
        #[source]
        source: reqwest::Error,
    },
    /// 上传成功但响应中没有文件地址
    #[error("上传响应缺少 url 字段 ({endpoint})")]
    MissingUploadUrl { endpoint: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 文件名无法识别
    #[error("无法识别文件名: {path}")]
    InvalidFileName { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件读取失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 申请提交流程的失败原因
///
/// 每个变体恰好对应一条展示给用户的提示（见 [`SubmissionError::notification`]），
/// 不会继续向上传播。
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// 上一次提交尚未完成
    #[error("已有申请正在提交")]
    AlreadySubmitting,
    /// 没有选择学生证图片
    #[error("未选择学生证图片")]
    MissingAttachment,
    /// 价格无法解析为有效数字
    #[error("价格无法解析: '{input}'")]
    InvalidRate { input: String },
    /// 上传接口返回失败
    #[error("上传失败: {message:?}")]
    UploadFailed { message: Option<String> },
    /// 申请接口拒绝
    #[error("申请被拒绝: {message:?}")]
    Rejected { message: Option<String> },
    /// 任一步骤的网络或解析错误
    #[error("网络或响应错误: {source}")]
    TransportError {
        #[source]
        source: ApiError,
    },
}

pub const MISSING_ATTACHMENT_MESSAGE: &str = "Please upload your Student ID card image.";
pub const INVALID_RATE_MESSAGE: &str = "Please enter a valid rate per 10 pages.";
pub const ALREADY_SUBMITTING_MESSAGE: &str =
    "Your application is already being submitted. Please wait.";
pub const UPLOAD_FAILED_FALLBACK: &str = "Failed to upload file";
pub const REJECTED_FALLBACK: &str = "Error submitting application. Please try again.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

impl SubmissionError {
    /// 转换为展示给用户的提示文本
    ///
    /// 优先使用服务端返回的 message，为空时使用固定的兜底文本
    pub fn notification(&self) -> String {
        match self {
            SubmissionError::AlreadySubmitting => ALREADY_SUBMITTING_MESSAGE.to_string(),
            SubmissionError::MissingAttachment => MISSING_ATTACHMENT_MESSAGE.to_string(),
            SubmissionError::InvalidRate { .. } => INVALID_RATE_MESSAGE.to_string(),
            SubmissionError::UploadFailed { message } => {
                server_message_or(message.as_deref(), UPLOAD_FAILED_FALLBACK)
            }
            SubmissionError::Rejected { message } => {
                server_message_or(message.as_deref(), REJECTED_FALLBACK)
            }
            SubmissionError::TransportError { .. } => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    /// 是否在发出任何网络请求之前就失败
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SubmissionError::AlreadySubmitting
                | SubmissionError::MissingAttachment
                | SubmissionError::InvalidRate { .. }
        )
    }
}

impl From<ApiError> for SubmissionError {
    fn from(source: ApiError) -> Self {
        SubmissionError::TransportError { source }
    }
}

fn server_message_or(message: Option<&str>, fallback: &str) -> String {
    match message.map(str::trim) {
        Some(msg) if !msg.is_empty() => msg.to_string(),
        _ => fallback.to_string(),
    }
}

// ========== 便捷构造函数 ==========

impl ApiError {
    /// 创建网络请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建 JSON 解析失败错误
    pub fn json_parse_failed(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        ApiError::JsonParseFailed {
            endpoint: endpoint.into(),
            source,
        }
    }
}
