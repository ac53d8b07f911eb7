//! HTML 片段渲染
//!
//! 只负责把状态转换为字符串，不发请求、不修改状态。
//! 片段由 askama 模板（`templates/`）生成，插值自动转义。

use askama::Template;
use tracing::error;

use crate::models::Writer;
use crate::orchestrator::state::{AppState, Section, WritersView};

pub const LOADING_TEXT: &str = "Loading...";
pub const WRITERS_ERROR_TEXT: &str = "Error loading writers. Please try again.";
pub const ALL_COLLEGES_LABEL: &str = "All Colleges";
pub const ALL_BRANCHES_LABEL: &str = "All Branches";

#[derive(Template)]
#[template(path = "filter_options.html")]
struct FilterOptionsTemplate<'a> {
    all_label: &'a str,
    items: &'a [String],
}

#[derive(Template)]
#[template(path = "writer_cards.html")]
struct WriterCardsTemplate<'a> {
    writers: &'a [Writer],
}

fn render_or<T: Template>(template: &T, fallback: &str) -> String {
    template.render().unwrap_or_else(|e| {
        error!("❌ 模板渲染失败: {}", e);
        fallback.to_string()
    })
}

/// 渲染下拉框选项，第一项为"全部"
///
/// # 参数
/// - `all_label`: 空值选项的文字
/// - `items`: 选项列表
pub fn render_filter_options(all_label: &str, items: &[String]) -> String {
    render_or(&FilterOptionsTemplate { all_label, items }, "")
}

/// 渲染写手卡片，每人一张
pub fn render_writer_cards(writers: &[Writer]) -> String {
    render_or(&WriterCardsTemplate { writers }, WRITERS_ERROR_TEXT)
}

/// 渲染写手列表区域
pub fn render_writers(view: &WritersView) -> String {
    match view {
        WritersView::Idle => String::new(),
        WritersView::Loading => LOADING_TEXT.to_string(),
        WritersView::Loaded(writers) => render_writer_cards(writers),
        WritersView::Failed => WRITERS_ERROR_TEXT.to_string(),
    }
}

/// 区块的 class 属性
pub fn section_class(state: &AppState, section: Section) -> &'static str {
    if state.is_visible(section) {
        "section"
    } else {
        "section hidden"
    }
}

/// 整个页面可变部分的渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// (区块 id, class) 列表
    pub sections: Vec<(&'static str, &'static str)>,
    pub college_options: String,
    pub branch_options: String,
    pub writers_list: String,
    /// 提交进行中时禁用提交按钮
    pub submit_disabled: bool,
}

impl PageView {
    pub fn render(state: &AppState) -> Self {
        Self {
            sections: Section::ALL
                .into_iter()
                .map(|section| (section.id(), section_class(state, section)))
                .collect(),
            college_options: render_filter_options(
                ALL_COLLEGES_LABEL,
                &state.filter_options.colleges,
            ),
            branch_options: render_filter_options(
                ALL_BRANCHES_LABEL,
                &state.filter_options.branches,
            ),
            writers_list: render_writers(&state.writers),
            submit_disabled: state.submitting,
        }
    }

    pub fn visible_section(&self) -> Option<&'static str> {
        self.sections
            .iter()
            .find(|(_, class)| *class == "section")
            .map(|(id, _)| *id)
    }
}
