use serde::{Deserialize, Serialize};

/// `POST /api/upload-student-id` 的响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: Option<String>,
    pub message: Option<String>,
}

/// `POST /api/writers/apply` 的响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyResponse {
    pub success: bool,
    pub message: Option<String>,
}
