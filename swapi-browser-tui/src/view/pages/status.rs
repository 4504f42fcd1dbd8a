//! 加载中 / 出错页面
//!
//! 这两个画面只显示一行文字，不画搜索框、卡片和分页。

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::view::theme::colors;

/// 渲染加载中
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let line = Line::styled(t().common.loading, Style::default().fg(colors().fg));
    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染出错信息
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::styled(
        format!("{} {}", t().common.error, message),
        Style::default().fg(colors().error),
    );
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: false }), area);
}
