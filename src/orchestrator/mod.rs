//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责页面状态和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `state` - 页面状态
//! - 当前显示的区块、筛选条件、写手列表、表单、提示队列
//! - 只能通过具名事件（`AppEvent`）修改
//!
//! ### `app` - 页面控制器
//! - 响应区块切换、筛选、表单提交
//! - 调用 services / workflow，把结果转换为事件
//!
//! ## 层次关系
//!
//! ```text
//! app (页面控制器)
//!     ↓
//! workflow::ApplicationFlow (一次申请) / services::DirectoryService (查询)
//!     ↓
//! clients::MarketplaceApi (接口)
//!     ↓
//! infrastructure::HttpExecutor (基础设施)
//! ```

pub mod app;
pub mod state;

// 重新导出主要类型
pub use app::App;
pub use state::{AppEvent, AppState, Notification, NotificationKind, Section, WritersView};
