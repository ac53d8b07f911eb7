//! # Writer Portal
//!
//! 写手市场的客户端：浏览写手、按学院/方向筛选、提交写手申请
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（reqwest Client），只暴露能力
//! - `HttpExecutor` - 唯一的 client owner，提供 GET / POST JSON / multipart 能力
//!
//! ### ② 接口层（Clients）
//! - `clients/` - `MarketplaceApi` trait 及其 HTTP 实现 `MarketplaceClient`
//!
//! ### ③ 业务能力层（Services）
//! - `DirectoryService` - 筛选项和写手列表查询
//!
//! ### ④ 流程层（Workflow）
//! - `ApplicationFlow` - 一次申请的完整流程（上传 → 提交），带单飞保护
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/state` - 页面状态，只通过具名事件修改
//! - `orchestrator/app` - 页面控制器
//!
//! ### ⑥ 展示层（Presentation）
//! - `presentation/html` - 把状态渲染为 HTML 片段
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod presentation;
pub mod services;
pub mod utils;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

// 重新导出常用类型
pub use clients::{MarketplaceApi, MarketplaceClient};
pub use config::Config;
pub use error::{ApiError, SubmissionError};
pub use infrastructure::HttpExecutor;
pub use models::{ApplicationForm, ApplicationRecord, Attachment, Writer, WriterFilter};
pub use orchestrator::{App, AppEvent, AppState, Section};
pub use workflow::{ApplicationFlow, SubmissionReceipt};
