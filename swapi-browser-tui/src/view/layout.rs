//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, PageState, PageStatus};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    match &app.status {
        PageStatus::Loading { .. } => pages::status::render_loading(frame, size),
        PageStatus::Error(message) => pages::status::render_error(frame, size, message),
        PageStatus::Ready(state) => render_ready(app, state, frame, size),
    }

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 就绪状态：标题栏 + 搜索框 + 卡片列表 + 分页 + 状态栏
fn render_ready(app: &App, state: &PageState, frame: &mut Frame, size: Rect) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 搜索框
            Constraint::Min(3),    // 卡片列表
            Constraint::Length(1), // 分页
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    components::search_bar::render(app, frame, main_layout[1]);
    pages::people::render(app, state, frame, main_layout[2]);
    components::pagination::render(state.pagination(), frame, main_layout[3]);
    components::statusbar::render(app, frame, main_layout[4]);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {}", t().common.app_name))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
