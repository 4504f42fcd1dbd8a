//! 搜索框组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染搜索框
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_search() && !app.modal.is_open();

    let block = Block::default()
        .title(format!(" {} ", texts.search.title))
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border()
        });

    let cursor = if focused { "▎" } else { "" };

    let line = if app.search.is_empty() {
        Line::from(vec![
            Span::raw(cursor),
            Span::styled(texts.search.placeholder, Style::default().fg(c.muted)),
        ])
    } else {
        Line::from(vec![
            Span::styled(app.search.as_str(), Style::default().fg(c.fg)),
            Span::raw(cursor),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
