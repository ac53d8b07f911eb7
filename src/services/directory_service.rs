//! 写手目录服务 - 业务能力层
//!
//! 只负责"查询筛选项和写手列表"能力，不关心页面状态

use std::sync::Arc;

use tracing::{debug, info};

use crate::clients::MarketplaceApi;
use crate::error::ApiError;
use crate::models::{FilterOptions, Writer, WriterFilter};

/// 写手目录服务
///
/// 职责：
/// - 加载学院和方向两个下拉框的选项
/// - 按筛选条件查询写手
/// - 不持有任何页面状态
pub struct DirectoryService {
    api: Arc<dyn MarketplaceApi>,
}

impl DirectoryService {
    /// 创建新的目录服务
    pub fn new(api: Arc<dyn MarketplaceApi>) -> Self {
        Self { api }
    }

    /// 加载筛选项
    ///
    /// 两个请求并发发出，任一失败则整体失败
    pub async fn filter_options(&self) -> Result<FilterOptions, ApiError> {
        let (colleges, branches) =
            futures::future::try_join(self.api.colleges(), self.api.branches()).await?;

        debug!(
            "筛选项加载完成: {} 个学院, {} 个方向",
            colleges.len(),
            branches.len()
        );

        Ok(FilterOptions { colleges, branches })
    }

    /// 按条件查询写手
    pub async fn writers(&self, filter: &WriterFilter) -> Result<Vec<Writer>, ApiError> {
        let writers = self.api.writers(filter).await?;
        info!("✓ 找到 {} 位写手", writers.len());
        Ok(writers)
    }
}
