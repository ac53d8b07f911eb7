//! 申请提交上下文
//!
//! 封装"这是第几次提交、谁在提交"这一信息，只用于日志

use std::fmt::Display;

/// 申请提交上下文
#[derive(Debug, Clone)]
pub struct SubmissionCtx {
    /// 本进程内的提交序号（从1开始）
    pub attempt: usize,

    /// 申请人邮箱
    pub email: String,
}

impl SubmissionCtx {
    /// 创建新的提交上下文
    pub fn new(attempt: usize, email: impl Into<String>) -> Self {
        Self {
            attempt,
            email: email.into(),
        }
    }
}

impl Display for SubmissionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[申请 #{} 邮箱#{}]", self.attempt, self.email)
    }
}
