use crate::error::FileError;
use std::fmt;
use std::path::Path;

/// 待上传的附件（学生证图片）
///
/// 文件内容整体读入内存，学生证图片体积很小。
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// 从磁盘读取附件，MIME 类型根据扩展名推断
    pub async fn from_path(path: &Path) -> Result<Self, FileError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| FileError::InvalidFileName {
                path: path.display().to_string(),
            })?
            .to_string();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| FileError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;

        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self::new(file_name, mime_type, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
