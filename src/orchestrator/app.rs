//! 页面控制器 - 编排层
//!
//! ## 职责
//!
//! 1. **区块切换**：切换到写手列表时加载写手和筛选项
//! 2. **筛选**：记录筛选条件并重新加载写手
//! 3. **表单提交**：调用 ApplicationFlow，并把结果转换为提示、表单重置和区块切换
//!
//! 所有页面变化都通过 `AppState::apply` 完成，本层不做具体业务判断。

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::clients::{MarketplaceApi, MarketplaceClient};
use crate::config::Config;
use crate::models::{Attachment, FormField, WriterFilter};
use crate::orchestrator::state::{AppEvent, AppState, Notification, Section};
use crate::presentation::PageView;
use crate::services::DirectoryService;
use crate::workflow::ApplicationFlow;

/// 应用主结构
pub struct App {
    directory: DirectoryService,
    flow: ApplicationFlow,
    state: AppState,
}

impl App {
    /// 使用 HTTP 客户端初始化应用
    pub fn new(config: &Config) -> Self {
        Self::with_api(Arc::new(MarketplaceClient::new(config)))
    }

    /// 使用任意 API 实现初始化应用
    pub fn with_api(api: Arc<dyn MarketplaceApi>) -> Self {
        Self {
            directory: DirectoryService::new(api.clone()),
            flow: ApplicationFlow::new(api),
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// 渲染当前页面
    pub fn view(&self) -> PageView {
        PageView::render(&self.state)
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.state.take_notifications()
    }

    fn dispatch(&mut self, event: AppEvent) {
        self.state.apply(event);
    }

    /// 修改表单文本字段
    pub fn edit_form(&mut self, field: FormField, value: impl Into<String>) {
        self.dispatch(AppEvent::FormEdited(field, value.into()));
    }

    /// 选择（或清除）学生证图片
    pub fn select_attachment(&mut self, attachment: Option<Attachment>) {
        self.dispatch(AppEvent::AttachmentSelected(attachment));
    }

    /// 切换区块
    ///
    /// 切换到写手列表时重新加载全部写手和筛选项
    pub async fn show_section(&mut self, section: Section) {
        self.dispatch(AppEvent::SectionShown(section));

        if section == Section::Writers {
            self.load_writers(WriterFilter::default()).await;
            self.load_filter_options().await;
        }
    }

    /// 加载筛选项，失败时只记录日志，保留原有选项
    pub async fn load_filter_options(&mut self) {
        match self.directory.filter_options().await {
            Ok(options) => self.dispatch(AppEvent::FilterOptionsLoaded(options)),
            Err(e) => error!("❌ 加载筛选项失败: {}", e),
        }
    }

    /// 按条件加载写手
    pub async fn load_writers(&mut self, filter: WriterFilter) {
        self.dispatch(AppEvent::FilterChanged(filter.clone()));
        self.dispatch(AppEvent::WritersLoading);

        match self.directory.writers(&filter).await {
            Ok(writers) => self.dispatch(AppEvent::WritersLoaded(writers)),
            Err(e) => {
                error!("❌ 加载写手失败: {}", e);
                self.dispatch(AppEvent::WritersFailed);
            }
        }
    }

    /// 按下拉框中选中的值筛选写手
    pub async fn filter_writers(&mut self, college: &str, branch: &str) {
        self.load_writers(WriterFilter::new(college, branch)).await;
    }

    /// 提交申请表单
    ///
    /// 任何失败都转换为一条提示，不向外传播。返回是否提交成功。
    pub async fn submit_application(&mut self) -> bool {
        info!("📝 表单已提交");

        let form = self.state.form.clone();
        self.dispatch(AppEvent::SubmissionStarted);

        match self.flow.run(&form).await {
            Ok(receipt) => {
                if let Some(message) = &receipt.message {
                    debug!("服务端提示: {}", message);
                }
                self.dispatch(AppEvent::SubmissionSucceeded);
                true
            }
            Err(e) => {
                self.dispatch(AppEvent::SubmissionFailed(e.notification()));
                false
            }
        }
    }
}
