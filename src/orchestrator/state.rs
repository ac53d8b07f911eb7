//! 页面状态
//!
//! 页面上显示的一切都只能通过 [`AppState::apply`] 和具名的 [`AppEvent`] 改变，
//! 加载和提交的效果不需要渲染就能检查。

use crate::models::{ApplicationForm, Attachment, FilterOptions, FormField, Writer, WriterFilter};

/// 提交成功后的提示
pub const SUBMITTED_MESSAGE: &str =
    "Application submitted successfully! We will review your application.";

/// 页面区块，同一时刻只显示一个
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    /// 首页
    #[default]
    Main,
    /// 写手列表（带筛选）
    Writers,
    /// 写手申请表单
    Apply,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Main, Section::Writers, Section::Apply];

    /// 区块在页面上的元素 id
    pub fn id(self) -> &'static str {
        match self {
            Section::Main => "main",
            Section::Writers => "writers",
            Section::Apply => "apply",
        }
    }
}

/// 写手列表当前的显示内容
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WritersView {
    /// 尚未请求
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Writer>),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// 阻塞式的用户提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }
}

/// [`AppState`] 的状态转换
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    SectionShown(Section),
    FilterOptionsLoaded(FilterOptions),
    FilterChanged(WriterFilter),
    WritersLoading,
    WritersLoaded(Vec<Writer>),
    WritersFailed,
    FormEdited(FormField, String),
    AttachmentSelected(Option<Attachment>),
    SubmissionStarted,
    SubmissionSucceeded,
    /// 携带选定的失败提示文本
    SubmissionFailed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub section: Section,
    pub filter: WriterFilter,
    pub filter_options: FilterOptions,
    pub writers: WritersView,
    pub form: ApplicationForm,
    pub submitting: bool,
    notifications: Vec<Notification>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::SectionShown(section) => self.section = section,
            AppEvent::FilterOptionsLoaded(options) => self.filter_options = options,
            AppEvent::FilterChanged(filter) => self.filter = filter,
            AppEvent::WritersLoading => self.writers = WritersView::Loading,
            AppEvent::WritersLoaded(writers) => self.writers = WritersView::Loaded(writers),
            AppEvent::WritersFailed => self.writers = WritersView::Failed,
            AppEvent::FormEdited(field, value) => self.form.set(field, value),
            AppEvent::AttachmentSelected(attachment) => self.form.student_id = attachment,
            AppEvent::SubmissionStarted => self.submitting = true,
            AppEvent::SubmissionSucceeded => {
                self.submitting = false;
                self.notifications.push(Notification::success(SUBMITTED_MESSAGE));
                self.form.reset();
                self.section = Section::Main;
            }
            AppEvent::SubmissionFailed(text) => {
                self.submitting = false;
                self.notifications.push(Notification::error(text));
            }
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.section == section
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// 取出所有待展示的提示（按时间先后）
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
